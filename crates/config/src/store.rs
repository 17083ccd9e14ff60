//! Key-value preference storage.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::get_config_dir;

/// Fixed preference key for the active layout language.
pub const LANGUAGE_KEY: &str = "lang";

/// Small string key-value store for user preferences.
///
/// The engine reads and writes only through this trait, so hosts may back
/// it with any storage they own.
pub trait PreferenceStore {
    /// Value for `key`, or `None` when it was never set or cannot be read.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// TOML-file-backed preferences under the user config directory.
///
/// An unreadable or malformed file loads as empty: preferences are
/// optional and every consumer has a default for an absent key.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FilePreferences {
    /// Open `preferences.toml` in the config directory.
    pub fn open() -> Result<Self> {
        Ok(Self::at(get_config_dir()?.join("preferences.toml")))
    }

    /// Open a preferences file at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        let values = std::fs::read_to_string(&path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default();
        FilePreferences { path, values }
    }

    fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preferences to {}", self.path.display()))
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.write()
    }
}

/// In-memory preferences for tests and hosts with their own persistence.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
