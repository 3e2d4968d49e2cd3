//! Output formatting for subnet plans.
//!
//! This module handles formatting and exporting plans:
//! - [`csv`] - CSV export
//! - [`json`] - JSON document
//! - [`terminal`] - Terminal output with colors

mod csv;
mod json;
mod terminal;

pub use csv::{escape_csv_field, render_csv, write_csv, CSV_HEADER};
pub use json::{render_json, render_json_at};
pub use terminal::{render_capacity_report, render_error, render_plan, render_summary};
