//! Chart Routes
//!
//! Rendered chart artifacts as JSON.
//!
//! - GET /api/v1/charts - All charts in page order
//! - GET /api/v1/charts/:index - One chart

use axum::{extract::Path, Json};

use crate::chart::ChartArtifact;
use crate::page::charts;
use crate::server::dto::ChartListResponse;
use crate::server::error::{ApiError, ApiResult};

/// GET /api/v1/charts
pub async fn list_charts() -> ApiResult<Json<ChartListResponse>> {
    let charts = charts()?;

    Ok(Json(ChartListResponse {
        total: charts.len(),
        charts,
    }))
}

/// GET /api/v1/charts/:index
///
/// The index is parsed here rather than by the extractor so a malformed one
/// still gets the JSON error body.
pub async fn get_chart(Path(index): Path<String>) -> ApiResult<Json<ChartArtifact>> {
    let position: usize = index
        .parse()
        .map_err(|_| ApiError::BadChartIndex(index.clone()))?;

    let charts = charts()?;
    let available = charts.len();
    charts
        .into_iter()
        .nth(position)
        .map(Json)
        .ok_or_else(|| ApiError::unknown_chart(position, available))
}
