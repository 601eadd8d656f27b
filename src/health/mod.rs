//! Liveness endpoint.
//!
//! `GET /health` always answers `{"status": "ok"}`; it touches neither the
//! upstream nor the filesystem.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
