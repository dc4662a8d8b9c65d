//! FinOrden - personal income and expense tracker
//!
//! This library provides the core functionality behind the `finorden` binary:
//! recording income and expense movements, summarizing them per month, and
//! exporting them as CSV, from either the CLI or an interactive TUI.
//!
//! # Architecture
//!
//! - `config`: Paths and settings
//! - `error`: Custom error types
//! - `models`: Money, movements and periods
//! - `storage`: Key-value store, seed resources and the load fallback chain
//! - `services`: The session ledger, entry validation and aggregation
//! - `reports`: Dashboard, history and chart view models
//! - `export`: CSV export
//! - `display`: Terminal formatting for CLI output
//! - `cli`: CLI command handlers
//! - `tui`: Interactive terminal UI
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use finorden_cli::config::{paths::FinordenPaths, settings::Settings};
//! use finorden_cli::services::Ledger;
//! use finorden_cli::storage::open_gateway;
//!
//! let paths = FinordenPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let ledger = Ledger::open(open_gateway(&paths, &settings)?, chrono::Local::now().date_naive());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{FinordenError, FinordenResult};
