//! Terminal User Interface module
//!
//! An interactive front end built on ratatui: dashboard, history and chart
//! views, an entry dialog for new movements, and toast notifications.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
