//! # Types Module
//!
//! This module defines the core data structures used throughout the grader.
//! These types represent quiz questions and the result of grading a single answer.

use serde::{Deserialize, Serialize};

/// The highest number of points a single answer can earn.
pub const MAX_POINTS_PER_QUESTION: u32 = 25;

/// A quiz question with its reference material.
///
/// Questions are loaded once from the embedded question bank and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier of the question within the bank.
    pub id: i64,
    /// The question text shown to the user.
    pub question: String,
    /// Reference explanation used as grading context.
    pub context: String,
    /// The model answer the fallback grader compares against.
    pub ideal_answer: String,
}

/// Ordinal grading category shared by the model-based and fallback graders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl AccuracyBand {
    /// Parses a band token case-insensitively. Returns `None` for anything
    /// outside the four known tokens.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "excellent" => Some(AccuracyBand::Excellent),
            "good" => Some(AccuracyBand::Good),
            "fair" => Some(AccuracyBand::Fair),
            "poor" => Some(AccuracyBand::Poor),
            _ => None,
        }
    }

    /// The lowercase wire token for this band.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccuracyBand::Excellent => "excellent",
            AccuracyBand::Good => "good",
            AccuracyBand::Fair => "fair",
            AccuracyBand::Poor => "poor",
        }
    }

    /// Human-readable Indonesian label, as shown on the result screen.
    pub fn label(&self) -> &'static str {
        match self {
            AccuracyBand::Excellent => "Sangat Tepat",
            AccuracyBand::Good => "Cukup Tepat",
            AccuracyBand::Fair => "Kurang Tepat",
            AccuracyBand::Poor => "Sangat Kurang Tepat",
        }
    }
}

impl std::fmt::Display for AccuracyBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of grading one answer.
///
/// Produced once per answered question and appended to the session history;
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Grading category for the answer.
    pub accuracy: AccuracyBand,
    /// Points awarded, in `0..=MAX_POINTS_PER_QUESTION`.
    pub points: u32,
    /// Short natural-language feedback sentence.
    pub feedback: String,
}
