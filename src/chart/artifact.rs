//! Chart artifacts
//!
//! An artifact is the surface-independent result of rendering a table: marks
//! in table order with resolved geometry, colors and tooltip text. The SVG
//! writer and the JSON API both consume it unchanged.

use serde::Serialize;

use super::spec::ChartKind;

/// Default qualitative palette for series, slices and categorical colors
pub const PALETTE: [&str; 10] = [
    "#636EFA", // Blue
    "#EF553B", // Red
    "#00CC96", // Green
    "#AB63FA", // Purple
    "#FFA15A", // Orange
    "#19D3F3", // Cyan
    "#FF6692", // Pink
    "#B6E880", // Lime
    "#FF97FF", // Magenta
    "#FECB52", // Yellow
];

/// Endpoints of the continuous color scale
pub const SCALE_LOW: &str = "#0D0887";
pub const SCALE_HIGH: &str = "#F0F921";

/// Palette color for an index, wrapping around
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// A renderable chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartArtifact {
    /// Stable identifier (the source table name)
    pub id: String,
    pub kind: ChartKind,
    pub title: String,
    /// Category labels in table order
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    /// One entry per visual element, in drawing order
    pub marks: Vec<Mark>,
    pub x_axis: Option<Axis>,
    pub y_axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<ColorScale>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legend: Vec<LegendEntry>,
}

impl ChartArtifact {
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    /// Marks belonging to one category, in series order
    pub fn marks_for(&self, category: &str) -> impl Iterator<Item = &Mark> {
        let category = category.to_string();
        self.marks.iter().filter(move |m| m.category == category)
    }

    pub fn tooltips(&self) -> Vec<&str> {
        self.marks.iter().map(|m| m.tooltip.as_str()).collect()
    }
}

/// A named value series (one per value field)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub color: String,
}

/// One visual element representing one row (or one row of one series)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mark {
    pub category: String,
    /// Index into `ChartArtifact::series`
    pub series: usize,
    /// Displayed value (bar height, slice value, or y for scatter)
    pub value: f64,
    pub geometry: Geometry,
    pub color: String,
    /// Hover text, exactly `"<category>: <value>"`
    pub tooltip: String,
    /// Text drawn next to the mark (scatter labels)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Placement of a mark, in data coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Geometry {
    Bar {
        /// Category slot along the x axis
        slot: usize,
        /// Position within the slot for grouped bars
        group: usize,
        group_count: usize,
        /// Bottom of the bar (non-zero when stacked)
        base: f64,
        height: f64,
    },
    Slice {
        /// Cumulative fraction where the slice starts
        start: f64,
        /// Share of the whole
        fraction: f64,
    },
    Point {
        x: f64,
        y: f64,
        /// Marker radius in pixels
        radius: f64,
    },
}

/// Axis title and data extent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    pub min: f64,
    pub max: f64,
}

/// Mapping from a color field to mark colors
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColorScale {
    Continuous {
        field: String,
        min: f64,
        max: f64,
        low: String,
        high: String,
    },
    Discrete {
        field: String,
        entries: Vec<LegendEntry>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Linear interpolation between two `#RRGGBB` colors
pub fn interpolate(low: &str, high: &str, t: f64) -> String {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let (a, b) = match (parse_hex(low), parse_hex(high)) {
        (Some(a), Some(b)) => (a, b),
        _ => return low.to_string(),
    };

    let mix = |x: u8, y: u8| -> u8 { (x as f64 + (y as f64 - x as f64) * t).round() as u8 };

    format!(
        "#{:02X}{:02X}{:02X}",
        mix(a.0, b.0),
        mix(a.1, b.1),
        mix(a.2, b.2)
    )
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
