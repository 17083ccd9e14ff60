//! Configuration structures for klava settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Engine configuration with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Keyboard behavior settings
    #[serde(default)]
    pub keyboard: KeyboardSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Keyboard behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardSettings {
    /// Delay before a held printable key re-fires, in ms
    #[serde(default = "default_repeat_delay_ms")]
    pub repeat_delay_ms: u64,
}

impl KeyboardSettings {
    /// Repeat delay as a `Duration`.
    pub fn repeat_delay(&self) -> Duration {
        Duration::from_millis(self.repeat_delay_ms)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional; in-memory only when unset)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_repeat_delay_ms() -> u64 {
    defaults::REPEAT_DELAY_MS
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

// Default implementations
impl Default for KeyboardSettings {
    fn default() -> Self {
        Self {
            repeat_delay_ms: default_repeat_delay_ms(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.keyboard.repeat_delay_ms, 250);
        assert_eq!(config.keyboard.repeat_delay(), Duration::from_millis(250));
        assert_eq!(config.logging.min_level, "info");
        assert!(config.logging.file_path.is_none());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.keyboard.repeat_delay_ms, 250);
        assert_eq!(config.logging.min_level, "info");
    }

    #[test]
    fn test_partial_section_fills_missing_keys() {
        let config: Config = toml::from_str("[logging]\nmin_level = \"debug\"\n").unwrap();
        assert_eq!(config.logging.min_level, "debug");
        assert!(config.logging.file_path.is_none());
        assert_eq!(config.keyboard.repeat_delay_ms, 250);
    }

    #[test]
    fn test_round_trip() {
        let mut config = Config::default();
        config.keyboard.repeat_delay_ms = 400;
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.keyboard.repeat_delay_ms, 400);
        assert_eq!(parsed.logging.min_level, config.logging.min_level);
    }
}
