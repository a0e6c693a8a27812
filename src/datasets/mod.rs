//! Harvest Datasets
//!
//! Static tables of Irish agri-food statistics and the table model the chart
//! renderer consumes.
//!
//! ## Components
//!
//! - **Types**: `Column`, `Cell`, `Record` and `Table`
//! - **Registry**: one typed record struct and literal table per dataset

pub mod registry;
pub mod types;

pub use types::{format_value, Cell, Column, ColumnKind, Record, Table};
