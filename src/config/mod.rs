//! Configuration module for FinOrden
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinordenPaths;
pub use settings::Settings;
