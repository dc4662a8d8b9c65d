//! User settings for FinOrden
//!
//! Manages user preferences: currency symbol, where the seed data comes from,
//! and a few presentation defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::FinordenPaths;
use crate::error::FinordenError;
use crate::models::PeriodFilter;

/// User settings for FinOrden
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Seed resource consulted when the store is empty (file path or http(s) URL)
    #[serde(default = "default_seed_source")]
    pub seed_source: String,

    /// Upper bound for fetching a remote seed resource
    #[serde(default = "default_seed_timeout_secs")]
    pub seed_timeout_secs: u64,

    /// Period selector used when none is given (`all`, `current-month`, `previous-month`)
    #[serde(default = "default_period")]
    pub default_period: String,

    /// How long transient notices stay on screen
    #[serde(default = "default_notice_duration_secs")]
    pub notice_duration_secs: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_seed_source() -> String {
    "data/demo.json".to_string()
}

fn default_seed_timeout_secs() -> u64 {
    10
}

fn default_period() -> String {
    PeriodFilter::All.selector().to_string()
}

fn default_notice_duration_secs() -> u64 {
    2
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            seed_source: default_seed_source(),
            seed_timeout_secs: default_seed_timeout_secs(),
            default_period: default_period(),
            notice_duration_secs: default_notice_duration_secs(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinordenPaths) -> Result<Self, FinordenError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinordenError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinordenError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinordenPaths) -> Result<(), FinordenError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinordenError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FinordenError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// The configured default period filter
    pub fn period_filter(&self) -> PeriodFilter {
        PeriodFilter::from_selector(&self.default_period)
    }

    /// Timeout applied to remote seed fetches
    pub fn seed_timeout(&self) -> Duration {
        Duration::from_secs(self.seed_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.seed_source, "data/demo.json");
        assert_eq!(settings.notice_duration_secs, 2);
        assert_eq!(settings.period_filter(), PeriodFilter::All);
        assert_eq!(settings.seed_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinordenPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_period = "previous-month".to_string();
        settings.seed_source = "https://example.com/demo.json".to_string();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.period_filter(), PeriodFilter::PreviousMonth);
        assert_eq!(loaded.seed_source, "https://example.com/demo.json");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.seed_timeout_secs, 10);
        assert_eq!(settings.default_period, "all");
    }

    #[test]
    fn test_unknown_period_falls_back_to_all() {
        let settings = Settings {
            default_period: "last-decade".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.period_filter(), PeriodFilter::All);
    }
}
