//! Path management for FinOrden
//!
//! ## Path Resolution Order
//!
//! 1. `FINORDEN_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by the `directories` crate
//!    (`~/.config/finorden` on Linux, `~/Library/Application Support/finorden`
//!    on macOS, `%APPDATA%\finorden\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinordenError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINORDEN_DATA_DIR";

/// Manages all paths used by FinOrden
#[derive(Debug, Clone)]
pub struct FinordenPaths {
    /// Base directory for all FinOrden data
    base_dir: PathBuf,
}

impl FinordenPaths {
    /// Create a new FinordenPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform configuration directory can be determined.
    pub fn new() -> Result<Self, FinordenError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinordenPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the durable store directory (`<base>/data/store/`)
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir().join("store")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("finorden.log")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), FinordenError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinordenError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.store_dir())
            .map_err(|e| FinordenError::Io(format!("Failed to create store directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, FinordenError> {
    ProjectDirs::from("", "", "finorden")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            FinordenError::Config("Could not determine a configuration directory".into())
        })
}
