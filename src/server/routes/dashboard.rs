//! Dashboard Routes
//!
//! - GET / - The full dashboard page
//! - GET /charts/:file - One chart as SVG (`0.svg` .. `6.svg`)

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use crate::chart::to_svg;
use crate::page::{render_dashboard, sections};
use crate::server::error::{ApiError, ApiResult};
use crate::server::state::AppState;

/// GET /
///
/// Compose and return the dashboard page.
pub async fn page(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let html = render_dashboard(&state.options)?;
    Ok(Html(html))
}

/// GET /charts/:file
///
/// Render one section's chart as a standalone SVG image.
pub async fn chart_svg(
    State(state): State<Arc<AppState>>,
    Path(file): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let sections = sections();
    let available = sections.len();
    let section = file
        .strip_suffix(".svg")
        .and_then(|stem| stem.parse::<usize>().ok())
        .and_then(|index| sections.into_iter().nth(index))
        .ok_or_else(|| ApiError::unknown_chart(&file, available))?;

    let chart = section.render()?;
    let svg = to_svg(&chart, state.options.chart_width, state.options.chart_height);

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
