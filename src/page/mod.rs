//! Harvest Page
//!
//! Composes the dashboard document and writes it to a presentation surface.
//!
//! ## Components
//!
//! - **Surface**: the title / text / chart primitives a host provides
//! - **Composer**: the fixed sequence of headers, charts and commentary
//! - **HTML**: a self-contained HTML surface
//! - **Markdown**: the small markdown subset used by prose blocks

pub mod composer;
pub mod html;
pub mod markdown;
pub mod surface;

pub use composer::{charts, compose, sections, Section, HEADLINE, PAGE_TITLE};
pub use html::HtmlSurface;
pub use surface::{Surface, TextBlock};

use crate::chart::svg::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::chart::ChartResult;

/// Options for rendering the dashboard to HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            chart_width: DEFAULT_WIDTH,
            chart_height: DEFAULT_HEIGHT,
        }
    }
}

/// Compose the whole dashboard into one HTML document
pub fn render_dashboard(options: &RenderOptions) -> ChartResult<String> {
    let mut surface = HtmlSurface::new(options.chart_width, options.chart_height);
    compose(&mut surface)?;

    tracing::info!(charts = surface.chart_count(), "Rendered dashboard page");
    Ok(surface.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dashboard() {
        let html = render_dashboard(&RenderOptions::default()).unwrap();

        assert!(html.contains("<title>IFAMA Ireland 2026 Insights Dashboard - Simulation Model</title>"));
        assert_eq!(html.matches("<svg").count(), 7);
        assert_eq!(html.matches(r#"<div class="info">"#).count(), 7);
        assert!(html.contains("<strong>Teagasc</strong>"));
    }

    #[test]
    fn test_render_dashboard_is_deterministic() {
        let options = RenderOptions::default();
        assert_eq!(
            render_dashboard(&options).unwrap(),
            render_dashboard(&options).unwrap()
        );
    }
}
