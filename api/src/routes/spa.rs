//! Static asset serving with single-page-app fallback.
//!
//! Every request that does not match an `/api` route lands here. Files are served out of the
//! configured asset root (`STATIC_ROOT`, the pre-built client bundle); any path that does not
//! name a file falls back to `index.html` so client-side routing keeps working after a reload.

use crate::response::ErrorResponse;
use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use std::path::{Component, Path, PathBuf};
use tokio::{fs::File as FsFile, io::AsyncReadExt};
use util::config;

/// Fallback handler for all non-`/api` routes.
///
/// Serves the requested file when it exists under the asset root, otherwise
/// `index.html`. Requests whose path would escape the asset root are rejected.
pub async fn serve_spa(uri: Uri) -> Response {
    let root = PathBuf::from(config::static_root());
    let requested = uri.path().trim_start_matches('/');

    if !is_safe_path(requested) {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Not found")),
        )
            .into_response();
    }

    let fs_path = root.join(requested);
    if !requested.is_empty() && tokio::fs::metadata(&fs_path).await.is_ok_and(|m| m.is_file()) {
        return serve_file(&fs_path).await;
    }

    // SPA routing convention: anything else gets the entry page.
    serve_file(&root.join("index.html")).await
}

/// Rejects paths with parent-directory or absolute components.
fn is_safe_path(requested: &str) -> bool {
    Path::new(requested)
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

async fn serve_file(fs_path: &Path) -> Response {
    let mut file = match FsFile::open(fs_path).await {
        Ok(f) => f,
        Err(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Not found")),
            )
                .into_response();
        }
    };

    let mut buffer = Vec::new();
    if file.read_to_end(&mut buffer).await.is_err() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to read asset")),
        )
            .into_response();
    }

    let mime = mime_guess::from_path(fs_path)
        .first_or_octet_stream()
        .to_string();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&mime)
            .unwrap_or(HeaderValue::from_static("application/octet-stream")),
    );

    (StatusCode::OK, headers, buffer).into_response()
}
