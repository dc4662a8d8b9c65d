//! Reports module for FinOrden
//!
//! View models built from the movement list: the dashboard, the history
//! listing and the income/expense chart. Each one can render itself for the
//! terminal; the TUI draws them with widgets instead.

pub mod chart;
pub mod dashboard;
pub mod history;

pub use chart::ChartData;
pub use dashboard::DashboardView;
pub use history::HistoryView;
