//! # Overlap Grading Strategy
//!
//! This module provides the deterministic local fallback used when the model-backed grader
//! fails. It scores an answer by crude token overlap against the question's ideal answer and
//! maps the resulting ratio onto the four accuracy bands through a fixed policy table.
//!
//! The heuristic is intentionally crude (no stemming, no semantic similarity). It exists only as
//! a degraded-mode substitute, so the thresholds and point values are reproduced exactly rather
//! than tuned.

use crate::error::GraderError;
use crate::traits::grader::Grader;
use crate::types::{AccuracyBand, Evaluation, Question};
use async_trait::async_trait;

/// Local fallback strategy: grades by token overlap with the ideal answer.
///
/// Pure and deterministic, performs no I/O, and cannot fail.
#[derive(Debug)]
pub struct OverlapGrader;

impl OverlapGrader {
    /// Token-overlap similarity between two texts, in `0.0..=1.0`.
    ///
    /// Both texts are case-normalized and split on whitespace. A token of the
    /// answer counts as common when it contains, or is contained in, some token
    /// of the reference. The ratio is taken against the larger token count so
    /// padding an answer with noise cannot raise the score.
    pub fn similarity(answer: &str, reference: &str) -> f64 {
        let answer = answer.to_lowercase();
        let reference = reference.to_lowercase();
        let answer_tokens: Vec<&str> = answer.split_whitespace().collect();
        let reference_tokens: Vec<&str> = reference.split_whitespace().collect();

        let largest = answer_tokens.len().max(reference_tokens.len());
        if largest == 0 {
            return 0.0;
        }

        let common = answer_tokens
            .iter()
            .filter(|token| {
                reference_tokens
                    .iter()
                    .any(|reference_token| {
                        reference_token.contains(**token) || token.contains(reference_token)
                    })
            })
            .count();

        common as f64 / largest as f64
    }

    /// Maps an answer onto an [`Evaluation`] through the fixed similarity bands.
    ///
    /// Comparisons are strict `>`: a similarity sitting exactly on a threshold
    /// falls into the lower band.
    pub fn score(user_answer: &str, ideal_answer: &str) -> Evaluation {
        let similarity = Self::similarity(user_answer, ideal_answer);

        if similarity > 0.7 {
            Evaluation {
                accuracy: AccuracyBand::Excellent,
                points: 23,
                feedback: "Jawaban kamu sangat bagus dan akurat! 🎉".to_string(),
            }
        } else if similarity > 0.5 {
            Evaluation {
                accuracy: AccuracyBand::Good,
                points: 17,
                feedback: "Jawaban cukup bagus, ada beberapa konsep yang tepat! 👍".to_string(),
            }
        } else if similarity > 0.3 {
            Evaluation {
                accuracy: AccuracyBand::Fair,
                points: 11,
                feedback: "Jawaban kurang lengkap, coba pelajari lagi ya! 📚".to_string(),
            }
        } else {
            Evaluation {
                accuracy: AccuracyBand::Poor,
                points: 5,
                feedback: "Jawaban belum tepat, jangan menyerah terus belajar! 💪".to_string(),
            }
        }
    }
}

#[async_trait]
impl Grader for OverlapGrader {
    async fn grade(
        &self,
        user_answer: &str,
        question: &Question,
    ) -> Result<Evaluation, GraderError> {
        Ok(Self::score(user_answer, &question.ideal_answer))
    }
}
