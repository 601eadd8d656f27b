//! `POST /api/generate`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::generate::payload::GenerationRequest;
use crate::http::server::AppState;
use crate::upstream::{UpstreamClient, UpstreamError};

/// Validate the body, forward the prompt, relay the answer.
pub async fn generate(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    match relay(&state.upstream, &headers, &body).await {
        Ok(upstream_body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            upstream_body,
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

async fn relay(
    upstream: &UpstreamClient,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<Bytes, ApiError> {
    let content_type = headers.get(header::CONTENT_TYPE);
    let request = GenerationRequest::from_request(content_type, body).inspect_err(|err| {
        if let ApiError::Unexpected(message) = err {
            tracing::error!(error = %message, "Unreadable generate request");
        }
    })?;

    match upstream.complete(&request.credential, &request.prompt).await {
        Ok(upstream_body) => {
            tracing::info!(bytes = upstream_body.len(), "Upstream completion relayed");
            Ok(upstream_body)
        }
        Err(UpstreamError::Rejected {
            status,
            kind,
            message,
            raw,
        }) => {
            tracing::error!(
                status = status.as_u16(),
                error_type = %kind,
                error_message = %message,
                raw = %raw,
                "Upstream API error"
            );
            Err(ApiError::Upstream {
                status,
                kind,
                message,
            })
        }
        Err(err) => {
            tracing::error!(error = ?err, "Upstream call failed");
            Err(ApiError::Unexpected(err.to_string()))
        }
    }
}
