mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use helpers::app::make_test_app;
use serde_json::Value;
use tower::ServiceExt;

#[tokio::test]
async fn health_check_returns_ok_json() {
    let app = make_test_app("http://127.0.0.1:9");

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], "OK");
    assert_eq!(json["message"], "Health check passed");
}
