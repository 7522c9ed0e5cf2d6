//! Grader Error Types
//!
//! This module defines the [`GraderError`] enum, which encapsulates all error types that can occur
//! while requesting, parsing, and recording answer evaluations.
//! Each variant provides a descriptive error message for robust error handling and debugging.
//!
//! Note that the top-level evaluation entry point never surfaces these to its caller: every
//! grading failure is absorbed by the local fallback. The variants exist for the layers below it
//! and for session bookkeeping.

/// Represents all error types that can occur in the grader.
#[derive(Debug)]
pub enum GraderError {
    /// The gateway or external model could not be reached, or answered with a failure status.
    Upstream(String),
    /// JSON is malformed or does not match the expected schema.
    InvalidJson(String),
    /// A required field is missing from input.
    MissingField(String),
    /// A quiz session transition was attempted in the wrong state.
    SessionState(String),
}
