use crate::response::{ErrorResponse, EvaluateResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use serde::Deserialize;
use validator::Validate;

/// Request body for the grading gateway.
#[derive(Debug, Deserialize, Validate)]
pub struct EvaluateRequest {
    /// The assembled grading prompt. Forwarded verbatim; the gateway never
    /// inspects its contents.
    #[serde(default)]
    #[validate(length(min = 1, message = "prompt is required"))]
    pub prompt: String,
}

/// POST /api/evaluate
///
/// Forwards a grading prompt to the external model and returns the raw text it
/// produced. All interpretation of that text is the client's responsibility.
///
/// ### Request Body
/// ```json
/// {
///   "prompt": "Kamu adalah penilai jawaban kuis..."
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "aiText": "AKURASI: good\nPOIN: 17\nFEEDBACK: Cukup baik."
/// }
/// ```
///
/// - `400 Bad Request` (missing, empty, or non-text prompt; the model is not called)
/// ```json
/// {
///   "error": "prompt is required"
/// }
/// ```
///
/// - `502 Bad Gateway` (upstream failure; details are logged, never returned)
/// ```json
/// {
///   "error": "Upstream model request failed"
/// }
/// ```
pub async fn evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> impl IntoResponse {
    // A body that does not decode (e.g. a numeric prompt) is the same client
    // error as a missing one.
    let Ok(Json(req)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("prompt is required")),
        )
            .into_response();
    };

    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(error_message)),
        )
            .into_response();
    }

    match state.model().generate(&req.prompt).await {
        Ok(ai_text) => (StatusCode::OK, Json(EvaluateResponse { ai_text })).into_response(),
        Err(err) => {
            tracing::error!("model generation failed: {err:?}");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new("Upstream model request failed")),
            )
                .into_response()
        }
    }
}
