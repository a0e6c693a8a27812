//! Chart kinds and rendering parameters

use serde::Serialize;
use std::str::FromStr;

use super::error::RenderError;

/// Kind of chart to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    /// One bar per row; several value fields stack on top of each other
    Bar,
    /// Several value fields side by side within each category
    GroupedBar,
    /// One slice per row, sized by the first value field
    Pie,
    /// First value field on x, second on y
    Scatter,
    /// Scatter with marker area scaled by a size field
    ScatterWithSize,
    /// Scatter with the category printed above each point
    ScatterWithLabels,
}

impl ChartKind {
    pub fn all() -> &'static [ChartKind] {
        &[
            ChartKind::Bar,
            ChartKind::GroupedBar,
            ChartKind::Pie,
            ChartKind::Scatter,
            ChartKind::ScatterWithSize,
            ChartKind::ScatterWithLabels,
        ]
    }

    pub fn is_bar(&self) -> bool {
        matches!(self, ChartKind::Bar | ChartKind::GroupedBar)
    }

    pub fn is_scatter(&self) -> bool {
        matches!(
            self,
            ChartKind::Scatter | ChartKind::ScatterWithSize | ChartKind::ScatterWithLabels
        )
    }

    /// Whether the hosting page offers pan/zoom on this chart's axes
    pub fn is_zoomable(&self) -> bool {
        self.is_bar() || self.is_scatter()
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::GroupedBar => write!(f, "grouped-bar"),
            ChartKind::Pie => write!(f, "pie"),
            ChartKind::Scatter => write!(f, "scatter"),
            ChartKind::ScatterWithSize => write!(f, "scatter-with-size"),
            ChartKind::ScatterWithLabels => write!(f, "scatter-with-labels"),
        }
    }
}

impl FromStr for ChartKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::all()
            .iter()
            .copied()
            .find(|k| k.to_string() == s)
            .ok_or_else(|| RenderError::UnknownKind(s.to_string()))
    }
}

/// Parameters for rendering one table into a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    /// Column used for the category axis or slice names
    pub category_field: String,
    /// Measured columns, rendered in this order
    pub value_fields: Vec<String>,
    /// Column mapped to a color scale (continuous when numeric)
    pub color_field: Option<String>,
    /// Column scaling marker area on scatter charts
    pub size_field: Option<String>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, title: impl Into<String>, category_field: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            category_field: category_field.into(),
            value_fields: Vec::new(),
            color_field: None,
            size_field: None,
        }
    }

    /// Builder method: add a value field
    pub fn value(mut self, field: impl Into<String>) -> Self {
        self.value_fields.push(field.into());
        self
    }

    /// Builder method: add several value fields
    pub fn values<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Builder method: set the color field
    pub fn color(mut self, field: impl Into<String>) -> Self {
        self.color_field = Some(field.into());
        self
    }

    /// Builder method: set the size field
    pub fn size(mut self, field: impl Into<String>) -> Self {
        self.size_field = Some(field.into());
        self
    }
}
