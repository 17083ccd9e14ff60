//! Configuration and preference storage for klava.
//!
//! This crate provides engine settings loading and saving in TOML format
//! under XDG directory conventions, plus the small key-value preference
//! store the engine persists the active language through.

mod settings;
mod store;
mod xdg;

pub use settings::{Config, KeyboardSettings, LoggingSettings};
pub use store::{FilePreferences, MemoryPreferences, PreferenceStore, LANGUAGE_KEY};
pub use xdg::get_config_dir;

use anyhow::Result;
use std::path::PathBuf;

/// Default values as constants
pub mod defaults {
    pub const REPEAT_DELAY_MS: u64 = 250;
    pub const MIN_LOG_LEVEL: &str = "info";
}

impl Config {
    /// Load configuration from file.
    ///
    /// On first run, creates the config file with default values.
    /// Missing keys are auto-completed with defaults and written back.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if config_path.exists() {
            let original_content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&original_content)?;

            // Serialize back to get normalized content
            let normalized_content = toml::to_string_pretty(&config)?;
            if original_content != normalized_content {
                config.save()?;
            }

            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Get path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }
}
