//! # Quiz Session Module
//!
//! Explicit, process-local state for one run through the question bank: current question index,
//! cumulative score, the ordered evaluation history, and the answered flag. Each user action maps
//! to a single synchronous transition (`record_evaluation`, `advance`, `reset`); there is no
//! ambient shared state and nothing is persisted.
//!
//! Invariant: exactly one evaluation is recorded per answered question, in question order, and
//! the cumulative score always equals the sum of recorded points.

use crate::error::GraderError;
use crate::types::{Evaluation, Question};

/// Outcome of advancing past the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this index.
    NextQuestion(usize),
    /// The last question was already answered; the quiz is over.
    Finished,
}

/// One in-progress (or finished) run through the quiz.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    score: u32,
    evaluations: Vec<Evaluation>,
    answered: bool,
    finished: bool,
}

impl QuizSession {
    /// Starts a fresh session over `questions`, positioned at the first one.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
            evaluations: Vec::new(),
            answered: false,
            finished: false,
        }
    }

    /// The question currently awaiting an answer, or `None` once finished.
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.questions.get(self.current)
    }

    /// Records the evaluation for the current question.
    ///
    /// Adds its points to the cumulative score and marks the question answered.
    /// Rejects a second submission for the same question.
    pub fn record_evaluation(&mut self, evaluation: Evaluation) -> Result<&Evaluation, GraderError> {
        if self.finished {
            return Err(GraderError::SessionState(
                "quiz is already finished".to_string(),
            ));
        }
        if self.answered {
            return Err(GraderError::SessionState(
                "current question is already answered".to_string(),
            ));
        }

        self.score += evaluation.points;
        self.evaluations.push(evaluation);
        self.answered = true;
        Ok(self.evaluations.last().unwrap())
    }

    /// Moves on from an answered question.
    ///
    /// Returns where the session landed; rejected while the current question is
    /// still unanswered so evaluations stay in strict question order.
    pub fn advance(&mut self) -> Result<Advance, GraderError> {
        if self.finished {
            return Err(GraderError::SessionState(
                "quiz is already finished".to_string(),
            ));
        }
        if !self.answered {
            return Err(GraderError::SessionState(
                "current question has not been answered".to_string(),
            ));
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.answered = false;
            Ok(Advance::NextQuestion(self.current))
        } else {
            self.finished = true;
            Ok(Advance::Finished)
        }
    }

    /// Resets the session to its initial values over the same questions.
    pub fn reset(&mut self) {
        self.current = 0;
        self.score = 0;
        self.evaluations.clear();
        self.answered = false;
        self.finished = false;
    }

    /// Cumulative score so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Ordered evaluations recorded so far.
    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    /// Zero-based index of the current question.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Whether the current question already has an evaluation.
    pub fn has_answered(&self) -> bool {
        self.answered
    }

    /// Number of questions in this session.
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The questions this session runs over.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Whether the last question has been answered and advanced past.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
