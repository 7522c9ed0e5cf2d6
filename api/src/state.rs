//! Application state container shared across Axum route handlers.
//!
//! The gateway is stateless across requests: this struct only carries the external model client,
//! which is itself cheap to clone. It is passed into handlers via Axum's `State<T>` extractor.

use crate::services::model::ModelClient;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    model: ModelClient,
}

impl AppState {
    /// Creates a new `AppState` around the given model client.
    pub fn new(model: ModelClient) -> Self {
        Self { model }
    }

    /// Creates the production state, with the model client configured from the
    /// environment.
    pub fn from_config() -> Self {
        Self::new(ModelClient::from_config())
    }

    /// Returns a shared reference to the model client.
    pub fn model(&self) -> &ModelClient {
        &self.model
    }
}
