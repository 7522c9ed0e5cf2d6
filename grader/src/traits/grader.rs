//!
//! # Grader Trait
//!
//! This module defines the [`Grader`] trait, the pluggable grading strategy seam.
//!
//! Each strategy produces an [`Evaluation`] for one free-text answer to one question. The
//! model-backed strategy talks to the grading gateway; the overlap strategy computes a local
//! token-overlap score. The evaluation job composes the two so that any remote failure is
//! absorbed locally.
//!

use crate::error::GraderError;
use crate::types::{Evaluation, Question};
use async_trait::async_trait;

/// A pluggable grading strategy.
///
/// Implement this trait to define how an answer is scored. Strategies must be
/// usable from concurrent contexts, hence the `Send + Sync` bound.
#[async_trait]
pub trait Grader: Send + Sync {
    /// Grade `user_answer` against `question`.
    ///
    /// # Returns
    /// - `Ok(Evaluation)`: the scored result.
    /// - `Err(GraderError)`: if the strategy could not produce a result (e.g. the
    ///   gateway was unreachable). Callers decide whether to fall back.
    async fn grade(&self, user_answer: &str, question: &Question)
    -> Result<Evaluation, GraderError>;
}
