//! `GET /` and `GET /{path}`.

use std::path::Path as FsPath;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use mime_guess::mime;

use crate::http::server::AppState;

/// Serve the root document.
pub async fn serve_index(State(state): State<AppState>) -> Response {
    match state.assets.resolve_index().await {
        Some(file) => send_file(&file).await,
        None => {
            tracing::warn!(root = %state.assets.root().display(), "Root document missing");
            file_not_found()
        }
    }
}

/// Serve any other file under the asset root.
pub async fn serve_asset(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    if state.assets.is_api_path(&path) {
        return api_not_found().await;
    }

    match state.assets.resolve(&path).await {
        Some(file) => send_file(&file).await,
        None => {
            tracing::debug!(path = %path, "Asset not found");
            file_not_found()
        }
    }
}

/// API routes are never files; a GET on one answers like a missing route.
pub async fn api_not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}

async fn send_file(file: &FsPath) -> Response {
    match tokio::fs::read(file).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type(file))],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(path = %file.display(), error = %e, "Failed to read asset");
            file_not_found()
        }
    }
}

fn file_not_found() -> Response {
    (StatusCode::NOT_FOUND, "File not found").into_response()
}

/// Guess from the extension; text gets an explicit UTF-8 charset.
fn content_type(file: &FsPath) -> String {
    let guessed = mime_guess::from_path(file).first_or_octet_stream();
    if guessed.type_() == mime::TEXT && guessed.get_param(mime::CHARSET).is_none() {
        format!("{guessed}; charset=utf-8")
    } else {
        guessed.to_string()
    }
}
