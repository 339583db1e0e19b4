//! Liveness endpoint
//!
//! Reports that the HTTP layer is serving. Scrape failures never degrade
//! this endpoint; a failed scrape terminates the exporter outright, so a
//! responding `/health` implies the process is in its normal serving state.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

/// Body of the `/health` response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    fn current() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::current()))
}
