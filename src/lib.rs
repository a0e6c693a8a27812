//! # Harvest
//!
//! Ireland agri-food insights dashboard. Static datasets are rendered into
//! bar, pie and scatter charts with hover tooltips and composed into one
//! scrolling page of headers, charts and commentary.
//!
//! ## Modules
//!
//! - [`datasets`]: Typed literal tables of Irish agri-food statistics
//! - [`chart`]: Chart renderer, chart artifacts and SVG output
//! - [`page`]: Page composer and the HTML presentation surface
//! - [`server`]: HTTP host for the dashboard, built with Axum
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use harvest::page::{render_dashboard, RenderOptions};
//!
//! let html = render_dashboard(&RenderOptions::default()).unwrap();
//! assert!(html.contains("Irish Agri-Food Landscape"));
//! ```

pub mod chart;
pub mod config;
pub mod datasets;
pub mod page;
pub mod server;

// Re-export top-level types for convenience
pub use chart::{
    render, to_svg, ChartArtifact, ChartError, ChartKind, ChartResult, ChartSpec, Mark,
    RenderError, SchemaError,
};

pub use datasets::{Cell, Column, ColumnKind, Record, Table};

pub use page::{compose, render_dashboard, HtmlSurface, RenderOptions, Surface, TextBlock};

pub use server::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig, RenderConfig, ServerConfig};
