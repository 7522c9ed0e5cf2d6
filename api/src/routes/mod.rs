//! HTTP route entry point for `/api/...`.
//!
//! This module defines all HTTP entry points under the `/api` namespace.
//!
//! Route groups include:
//! - `/health` → Health check endpoint (public)
//! - `/evaluate` → Grading gateway: forwards a prompt to the external model
//!
//! Everything outside `/api` falls through to the static single-page-app
//! handler wired up in `main`.

use crate::routes::{evaluate::evaluate_routes, health::health_routes};
use crate::state::AppState;
use axum::Router;

pub mod evaluate;
pub mod health;
pub mod spa;

/// Builds the complete application router for all HTTP endpoints.
///
/// # Route Structure:
/// - `/health` → Health check endpoint (no authentication required).
/// - `/evaluate` → `POST` grading gateway.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/evaluate", evaluate_routes())
        .with_state(app_state)
}
