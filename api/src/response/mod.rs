use serde::Serialize;

/// Standardized API response wrapper for internal JSON endpoints.
///
/// This struct enforces a consistent response structure:
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Some message"
/// }
/// ```
///
/// Only the health probe uses this envelope. The evaluate endpoint follows the
/// client wire contract ([`EvaluateResponse`] / [`ErrorResponse`]) instead.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

/// Success body for `POST /api/evaluate`.
///
/// Carries the external model's raw text output as a single field; the gateway
/// performs no interpretation of it.
///
/// ## Example
/// ```json
/// {
///   "aiText": "AKURASI: good\nPOIN: 17\nFEEDBACK: Cukup baik."
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    #[serde(rename = "aiText")]
    pub ai_text: String,
}

/// Error body for all gateway failures.
///
/// Client errors carry the validation message; server errors carry an opaque
/// description that never leaks upstream internals.
///
/// ## Example
/// ```json
/// {
///   "error": "prompt is required"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Constructs an error response with the given description.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
