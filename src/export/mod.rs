//! Export module for FinOrden
//!
//! Writes the movement list out as CSV for spreadsheets.

pub mod csv;

pub use csv::{export_movements_csv, export_to_file, EXPORT_FILENAME};
