//! # Quiz Report Module
//!
//! Serializable summary of a finished session: total score, maximum possible, percentage, and
//! the per-question evaluations in answer order.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "total_score": 45,
//!   "max_score": 250,
//!   "percentage": 18.0,
//!   "results": [
//!     { "question_id": 1, "question": "...", "accuracy": "good", "points": 17, "feedback": "..." },
//!     ...
//!   ],
//!   "generated_at": "2025-11-03T08:00:00Z"
//! }
//! ```

use crate::error::GraderError;
use crate::session::QuizSession;
use crate::types::{AccuracyBand, MAX_POINTS_PER_QUESTION};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Round a float to two decimal places in an efficient manner.
///
/// Uses the common multiply / round / divide trick. Kept local to this module
/// so it's cheap to inline and obvious where rounding is happening.
#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// One graded question in the final report.
#[derive(Debug, Serialize)]
pub struct QuestionResult {
    pub question_id: i64,
    pub question: String,
    pub accuracy: AccuracyBand,
    pub points: u32,
    pub feedback: String,
}

/// The final report for a finished quiz session.
#[derive(Debug, Serialize)]
pub struct QuizReport {
    /// Sum of all points awarded.
    pub total_score: u32,
    /// Number of questions times the per-question maximum.
    pub max_score: u32,
    /// `total_score / max_score` as a percentage, rounded to two decimals.
    pub percentage: f64,
    /// Per-question outcomes in answer order.
    pub results: Vec<QuestionResult>,
    /// When this report was generated.
    pub generated_at: DateTime<Utc>,
}

impl QuizReport {
    /// Builds the report for a finished session.
    ///
    /// # Returns
    /// - `Ok(QuizReport)` once every question has been answered and advanced past.
    /// - `Err(GraderError::SessionState)` while the quiz is still in progress.
    pub fn from_session(session: &QuizSession) -> Result<Self, GraderError> {
        if !session.is_finished() {
            return Err(GraderError::SessionState(
                "cannot report on an unfinished quiz".to_string(),
            ));
        }

        let results: Vec<QuestionResult> = session
            .questions()
            .iter()
            .zip(session.evaluations())
            .map(|(question, evaluation)| QuestionResult {
                question_id: question.id,
                question: question.question.clone(),
                accuracy: evaluation.accuracy,
                points: evaluation.points,
                feedback: evaluation.feedback.clone(),
            })
            .collect();

        let total_score = session.score();
        let max_score = session.total_questions() as u32 * MAX_POINTS_PER_QUESTION;
        let percentage = if max_score > 0 {
            round2(total_score as f64 / max_score as f64 * 100.0)
        } else {
            0.0
        };

        Ok(QuizReport {
            total_score,
            max_score,
            percentage,
            results,
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::QuizSession;
    use crate::types::{Evaluation, Question};

    fn finished_session() -> QuizSession {
        let questions = vec![
            Question {
                id: 1,
                question: "Pertanyaan 1".to_string(),
                context: "Konteks 1".to_string(),
                ideal_answer: "Jawaban 1".to_string(),
            },
            Question {
                id: 2,
                question: "Pertanyaan 2".to_string(),
                context: "Konteks 2".to_string(),
                ideal_answer: "Jawaban 2".to_string(),
            },
        ];
        let mut session = QuizSession::new(questions);
        for (accuracy, points) in [(AccuracyBand::Excellent, 23), (AccuracyBand::Fair, 11)] {
            session
                .record_evaluation(Evaluation {
                    accuracy,
                    points,
                    feedback: "Oke.".to_string(),
                })
                .unwrap();
            session.advance().unwrap();
        }
        session
    }

    #[test]
    fn report_totals_match_the_session() {
        let report = QuizReport::from_session(&finished_session()).unwrap();
        assert_eq!(report.total_score, 34);
        assert_eq!(report.max_score, 50);
        assert_eq!(report.percentage, 68.0);
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].question_id, 1);
        assert_eq!(report.results[1].accuracy, AccuracyBand::Fair);
    }

    #[test]
    fn unfinished_session_is_rejected(){
        let mut session = finished_session();
        session.reset();
        assert!(matches!(
            QuizReport::from_session(&session),
            Err(GraderError::SessionState(_))
        ));
    }
}
