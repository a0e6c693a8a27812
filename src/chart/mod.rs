//! Harvest Charts
//!
//! Renders dataset tables into chart artifacts and serializes artifacts to SVG.
//!
//! ## Components
//!
//! - **Spec**: `ChartKind` plus the `ChartSpec` rendering parameters
//! - **Renderer**: pure `Table` + `ChartSpec` to `ChartArtifact` transformation
//! - **Artifact**: marks, series, axes and color scales ready for display
//! - **SVG**: inline SVG output with native hover tooltips
//!
//! ## Example
//!
//! ```rust
//! use harvest::chart::{render, ChartKind, ChartSpec};
//! use harvest::datasets::registry;
//!
//! let spec = ChartSpec::new(ChartKind::Bar, "Exports", registry::PRODUCT)
//!     .value(registry::EXPORT_VALUE);
//! let chart = render(&registry::products(), &spec).unwrap();
//!
//! assert_eq!(chart.marks[0].tooltip, "Beef: 2100");
//! ```

pub mod artifact;
pub mod error;
pub mod renderer;
pub mod spec;
pub mod svg;

pub use artifact::{Axis, ChartArtifact, ColorScale, Geometry, LegendEntry, Mark, Series};
pub use error::{ChartError, ChartResult, RenderError, SchemaError};
pub use renderer::{render, tooltip};
pub use spec::{ChartKind, ChartSpec};
pub use svg::to_svg;
