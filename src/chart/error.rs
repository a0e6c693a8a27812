//! Chart error types
//!
//! Both error families are programmer errors: every table and field reference
//! in the dashboard is a literal, so neither should surface at run time.

use thiserror::Error;

/// A chart referenced a field the table does not provide (or provides with the
/// wrong kind)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// Field name absent from the table schema
    #[error("Field not found in table '{table}': {field}")]
    MissingField { table: String, field: String },

    /// Value or size field exists but holds text
    #[error("Field '{field}' in table '{table}' is not numeric")]
    NotNumeric { table: String, field: String },
}

/// The chart cannot be produced from otherwise valid inputs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Table has no rows
    #[error("Table '{0}' has no rows")]
    EmptyTable(String),

    /// Chart kind name is not recognized
    #[error("Unknown chart kind: {0}")]
    UnknownKind(String),

    /// Title is empty or whitespace
    #[error("Chart title must not be empty")]
    EmptyTitle,

    /// No value fields were configured
    #[error("Chart needs at least one value field")]
    NoValueFields,

    /// Scatter charts plot the first value field against the second
    #[error("Scatter charts need an x and a y value field, got {0}")]
    ScatterAxes(usize),

    /// Rows are colored by a field while series are told apart by color
    #[error("Color field '{field}' cannot be combined with {series} value series")]
    ColorWithSeries { field: String, series: usize },
}

/// Errors returned by the chart renderer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
