//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::page::charts;
use crate::server::dto::HealthResponse;
use crate::server::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status. Healthy when every dashboard chart renders.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (status, count) = match charts() {
        Ok(charts) => ("healthy", charts.len()),
        Err(e) => {
            tracing::warn!("Dashboard charts failed to render: {}", e);
            ("unhealthy", 0)
        }
    };

    Json(HealthResponse {
        status: status.to_string(),
        charts: count,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
