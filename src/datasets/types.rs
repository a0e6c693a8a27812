//! Core table types for the Harvest dataset registry
//!
//! This module defines the shapes every dataset is reduced to before rendering:
//! - `Column`: a named field with a text or numeric kind
//! - `Cell`: one value in a row
//! - `Record`: a typed row struct that knows its own column schema
//! - `Table`: an ordered, immutable sequence of rows sharing one schema

use serde::Serialize;

/// Kind of data stored in a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Category labels (farm names, trends, strategies)
    Text,
    /// Estimates, percentages and scores
    Numeric,
}

/// A named column in a table schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Text,
        }
    }

    pub const fn numeric(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Numeric,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.kind == ColumnKind::Numeric
    }
}

/// A single cell value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(&'static str),
    Number(f64),
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(_) => None,
        }
    }

    /// Display form of the cell; numbers use their shortest decimal representation
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => (*s).to_string(),
            Cell::Number(v) => format_value(*v),
        }
    }
}

/// Format a numeric value the way it appears in tooltips and labels.
///
/// Whole numbers print without a fractional part (`2100`, not `2100.0`).
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}

/// A typed dataset row
///
/// Each dataset declares one struct with named fields and implements this trait
/// so the renderer can address its columns by name.
pub trait Record {
    /// Column schema, in cell order
    const COLUMNS: &'static [Column];

    /// Cells of this row, in the same order as `COLUMNS`
    fn cells(&self) -> Vec<Cell>;
}

/// An ordered table of rows sharing one schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    /// Dataset name (used for logging and chart ids)
    pub name: &'static str,
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table from typed records, preserving record order
    pub fn from_records<R: Record>(name: &'static str, records: &[R]) -> Self {
        Self {
            name,
            columns: R::COLUMNS.to_vec(),
            rows: records.iter().map(Record::cells).collect(),
        }
    }

    /// Build an empty table with the given schema
    pub fn empty(name: &'static str, columns: &[Column]) -> Self {
        Self {
            name,
            columns: columns.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Index of the column with this name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)
    }

    /// Display label of a cell, `None` outside the table
    pub fn label(&self, row: usize, col: usize) -> Option<String> {
        self.cell(row, col).map(Cell::display)
    }

    /// Numeric value of a cell, `None` for text cells or outside the table
    pub fn number(&self, row: usize, col: usize) -> Option<f64> {
        self.cell(row, col).and_then(Cell::as_number)
    }

    /// All numeric values in a column, in row order
    pub fn numbers(&self, col: usize) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|r| r.get(col).and_then(Cell::as_number))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: &'static str,
        score: f64,
    }

    impl Record for Sample {
        const COLUMNS: &'static [Column] = &[Column::text("Name"), Column::numeric("Score")];

        fn cells(&self) -> Vec<Cell> {
            vec![Cell::Text(self.name), Cell::Number(self.score)]
        }
    }

    #[test]
    fn test_from_records_preserves_order() {
        let table = Table::from_records(
            "sample",
            &[
                Sample { name: "b", score: 2.0 },
                Sample { name: "a", score: 1.5 },
            ],
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table.label(0, 0).as_deref(), Some("b"));
        assert_eq!(table.label(1, 0).as_deref(), Some("a"));
        assert_eq!(table.number(1, 1), Some(1.5));
        assert_eq!(table.number(1, 0), None);
    }

    #[test]
    fn test_out_of_range_cells() {
        let table = Table::from_records("sample", &[Sample { name: "a", score: 1.0 }]);

        assert_eq!(table.label(1, 0), None);
        assert_eq!(table.label(0, 2), None);
        assert_eq!(table.number(5, 1), None);
        assert!(table.numbers(7).is_empty());
    }

    #[test]
    fn test_column_lookup() {
        let table = Table::empty("sample", Sample::COLUMNS);

        assert!(table.is_empty());
        assert_eq!(table.column_index("Score"), Some(1));
        assert_eq!(table.column_index("Missing"), None);
        assert!(table.column("Score").unwrap().is_numeric());
        assert!(!table.column("Name").unwrap().is_numeric());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(2100.0), "2100");
        assert_eq!(format_value(72.5), "72.5");
        assert_eq!(format_value(0.0), "0");
    }
}
