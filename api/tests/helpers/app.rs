use api::routes::routes;
use api::services::model::ModelClient;
use api::state::AppState;
use axum::{Json, Router, http::StatusCode, routing::post};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Builds the `/api` router around a model client pointed at `base_url`.
pub fn make_test_app(base_url: &str) -> Router {
    let model = ModelClient::new(
        base_url,
        "test-key",
        "test-model",
        256,
        0.3,
        Duration::from_secs(5),
    );
    Router::new().nest("/api", routes(AppState::new(model)))
}

/// Binds a stub model endpoint on a free local port.
///
/// Returns the stub's base URL plus a counter of how many generate calls it
/// received, so tests can assert the model was (not) consulted.
pub async fn spawn_stub_model(
    status: StatusCode,
    body: serde_json::Value,
) -> (String, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();

    let app = Router::new().route(
        "/models/{model}",
        post(move || {
            let seen = seen.clone();
            let body = body.clone();
            async move {
                seen.fetch_add(1, Ordering::SeqCst);
                (status, Json(body))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), calls)
}

/// A Gemini-shaped success body carrying `text` as the only candidate part.
pub fn model_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}
