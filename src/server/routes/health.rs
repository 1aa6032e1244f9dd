//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (review document loads)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::server::state::AppState;

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub reviews: String,
    pub review_count: usize,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 if the review document can be fetched and parsed.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.controller.source().fetch().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Review document not available");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// GET /health
///
/// Full health status. Pages still render without the review document,
/// so a failed load reports "degraded" rather than "unhealthy".
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (status, reviews, review_count) = match state.controller.source().fetch().await {
        Ok(document) => ("healthy", "ok", document.reviews.len()),
        Err(_) => ("degraded", "error", 0),
    };

    Json(HealthResponse {
        status: status.to_string(),
        reviews: reviews.to_string(),
        review_count,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
