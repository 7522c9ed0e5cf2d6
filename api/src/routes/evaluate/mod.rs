//! # Evaluate Routes Module
//!
//! This module defines and wires up routes for the `/evaluate` endpoint group — the grading
//! gateway between quiz clients and the external model.
//!
//! ## Structure
//! - `post.rs` — POST handler forwarding a grading prompt to the model

pub mod post;

use crate::state::AppState;
use axum::{Router, routing::post};

use post::evaluate;

/// Builds the `/evaluate` route group.
///
/// - `POST /evaluate` → `evaluate`
pub fn evaluate_routes() -> Router<AppState> {
    Router::new().route("/", post(evaluate))
}
