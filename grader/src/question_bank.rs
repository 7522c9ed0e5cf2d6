//! The fixed question bank.
//!
//! Ten PHP questions embedded at compile time. The bank is static data, not a
//! persistence layer: it is parsed once per caller and never written back.

use crate::error::GraderError;
use crate::types::Question;

static QUESTIONS_JSON: &str = include_str!("../assets/questions.json");

/// Loads the embedded default question bank.
pub fn load_default() -> Result<Vec<Question>, GraderError> {
    serde_json::from_str(QUESTIONS_JSON)
        .map_err(|e| GraderError::InvalidJson(format!("Invalid question bank JSON: {e}")))
}
