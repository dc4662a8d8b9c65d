//! Display formatting for terminal output
//!
//! Tables and text helpers used by the CLI commands.

pub mod movement;
pub mod report;

pub use movement::{format_movement_details, format_movement_table};
pub use report::{format_bar, format_money_colored, separator, truncate};
