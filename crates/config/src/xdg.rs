//! XDG Base Directory support for klava.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "klava";

/// Get the configuration directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME/klava` or `~/.config/klava`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}
