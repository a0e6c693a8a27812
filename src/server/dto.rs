//! Data Transfer Objects
//!
//! Response types for the JSON endpoints.

use serde::Serialize;

use crate::chart::ChartArtifact;

/// Chart list response
#[derive(Debug, Serialize)]
pub struct ChartListResponse {
    /// Number of charts on the dashboard
    pub total: usize,
    /// Charts in page order
    pub charts: Vec<ChartArtifact>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Number of charts that rendered
    pub charts: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
