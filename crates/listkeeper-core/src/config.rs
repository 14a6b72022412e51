//! Application Configuration
//!
//! Storage keys and defaults. Every field has a default, so a partial
//! JSON document (or none at all) yields a usable config.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEMS_KEY: &str = "items";
pub const DEFAULT_DARK_MODE_KEY: &str = "darkMode";
pub const DEFAULT_UNKNOWN_AUTHOR: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Storage key holding the serialized item collection
    pub items_key: String,
    /// Storage key holding the theme preference
    pub dark_mode_key: String,
    /// `createdBy` value assigned to records that lack one
    pub unknown_author: String,
    /// Number of log lines kept in memory
    pub log_capacity: usize,
    /// Minimum log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            items_key: DEFAULT_ITEMS_KEY.to_string(),
            dark_mode_key: DEFAULT_DARK_MODE_KEY.to_string(),
            unknown_author: DEFAULT_UNKNOWN_AUTHOR.to_string(),
            log_capacity: 500,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parsed log level, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"items_key":"groceries"}"#).unwrap();
        assert_eq!(config.items_key, "groceries");
        assert_eq!(config.dark_mode_key, "darkMode");
        assert_eq!(config.unknown_author, "Unknown");
    }

    #[test]
    fn test_level_filter() {
        let mut config = AppConfig::default();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
