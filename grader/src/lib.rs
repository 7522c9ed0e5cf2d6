//! # Grader Library
//!
//! This crate provides the core logic for evaluating free-text quiz answers.
//! It supports building a grading prompt for an external model, requesting a grade through the
//! gateway, parsing the model's semi-structured reply into a typed result, and degrading to a
//! deterministic token-overlap heuristic whenever the remote path fails.
//!
//! ## Key Concepts
//! - **EvaluationJob**: The main struct representing the grading of a single answer.
//! - **Graders**: Pluggable strategies for producing an evaluation (remote model, local overlap).
//! - **QuizSession**: Explicit per-run state: current question, score, evaluation history.
//! - **QuizReport**: Structured summary of a finished session.

pub mod error;
pub mod graders;
pub mod parser;
pub mod prompt;
pub mod question_bank;
pub mod report;
pub mod session;
pub mod traits;
pub mod types;

use crate::graders::overlap::OverlapGrader;
use crate::graders::remote::RemoteGrader;
use crate::traits::grader::Grader;
use crate::types::{Evaluation, Question};

/// Represents the grading of one answer to one question.
///
/// The job holds a primary grading strategy and a fallback. The primary is tried first; any
/// failure is logged and absorbed by the fallback, so [`EvaluationJob::evaluate`] always resolves
/// to a value and the quiz never surfaces a grading error to the user.
pub struct EvaluationJob {
    grader: Box<dyn Grader>,
    fallback: Box<dyn Grader>,
}

impl EvaluationJob {
    /// Creates a job with the default strategies: the configured gateway as the
    /// primary grader and token overlap as the fallback.
    pub fn new() -> Self {
        Self {
            grader: Box::new(RemoteGrader::from_config()),
            fallback: Box::new(OverlapGrader),
        }
    }

    /// Creates a job whose primary grader targets an explicit gateway URL.
    pub fn with_gateway(gateway_url: impl Into<String>) -> Self {
        Self {
            grader: Box::new(RemoteGrader::new(gateway_url)),
            fallback: Box::new(OverlapGrader),
        }
    }

    /// Set a custom primary grading strategy for this job.
    ///
    /// # Arguments
    /// * `grader` - An implementation of the `Grader` trait.
    pub fn with_grader<G: Grader + 'static>(mut self, grader: G) -> Self {
        self.grader = Box::new(grader);
        self
    }

    /// Set a custom fallback strategy for this job.
    ///
    /// # Arguments
    /// * `fallback` - An implementation of the `Grader` trait.
    pub fn with_fallback<G: Grader + 'static>(mut self, fallback: G) -> Self {
        self.fallback = Box::new(fallback);
        self
    }

    /// Grades `user_answer` against `question`.
    ///
    /// Never returns an error: a primary failure falls back to the configured
    /// fallback strategy, and a fallback failure (which the overlap grader
    /// cannot produce) degrades to scoring directly against the ideal answer.
    /// Failures are logged for diagnostics only.
    pub async fn evaluate(&self, user_answer: &str, question: &Question) -> Evaluation {
        match self.grader.grade(user_answer, question).await {
            Ok(evaluation) => evaluation,
            Err(err) => {
                tracing::warn!(
                    question_id = question.id,
                    "model grading failed, falling back to token overlap: {err:?}"
                );
                match self.fallback.grade(user_answer, question).await {
                    Ok(evaluation) => evaluation,
                    Err(err) => {
                        tracing::error!(
                            question_id = question.id,
                            "fallback grader failed, scoring overlap directly: {err:?}"
                        );
                        OverlapGrader::score(user_answer, &question.ideal_answer)
                    }
                }
            }
        }
    }
}

impl Default for EvaluationJob {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraderError;
    use crate::types::AccuracyBand;
    use async_trait::async_trait;

    struct FailingGrader;

    #[async_trait]
    impl Grader for FailingGrader {
        async fn grade(
            &self,
            _user_answer: &str,
            _question: &Question,
        ) -> Result<Evaluation, GraderError> {
            Err(GraderError::Upstream("boom".to_string()))
        }
    }

    fn sample_question() -> Question {
        Question {
            id: 7,
            question: "Apa itu REST API?".to_string(),
            context: "REST API adalah arsitektur berbasis HTTP.".to_string(),
            ideal_answer: "REST API adalah layanan berbasis HTTP.".to_string(),
        }
    }

    #[tokio::test]
    async fn primary_failure_falls_back_without_erroring() {
        let job = EvaluationJob::with_gateway("http://unused.invalid")
            .with_grader(FailingGrader);
        let evaluation = job
            .evaluate("REST API adalah layanan berbasis HTTP.", &sample_question())
            .await;
        // Identical to the ideal answer, so the overlap fallback lands on excellent.
        assert_eq!(evaluation.accuracy, AccuracyBand::Excellent);
        assert_eq!(evaluation.points, 23);
    }

    #[tokio::test]
    async fn unreachable_gateway_falls_back_without_erroring() {
        // Nothing listens on this port; the remote grader errors and the
        // overlap fallback takes over.
        let job = EvaluationJob::with_gateway("http://127.0.0.1:9/api/evaluate");
        let evaluation = job.evaluate("tidak tahu", &sample_question()).await;
        assert_eq!(evaluation.accuracy, AccuracyBand::Poor);
        assert_eq!(evaluation.points, 5);
    }
}
