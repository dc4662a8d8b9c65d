//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main.rs` with the service layer.

pub mod data;
pub mod export;
pub mod movement;
pub mod report;

pub use data::{handle_config_command, handle_reset_command, ResetArgs};
pub use export::{handle_export_command, ExportArgs};
pub use movement::{handle_add_command, handle_history_command, AddArgs, HistoryArgs};
pub use report::{handle_chart_command, handle_dashboard_command, PeriodArgs};
