// SPDX-License-Identifier: MPL-2.0
//! Session configuration persisted to `settings.toml`.
//!
//! The file is flat:
//!
//! ```toml
//! theme_name = "Yellow"
//! interval_seconds = 10
//! width = 600
//! height = 300
//! ```
//!
//! Loading is forgiving. A missing or unparsable file yields the defaults, an
//! unknown theme falls back to the default theme and a non-positive interval
//! or dimension falls back to its default, each without discarding the other
//! fields.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set the `TERM_MARQUEE_CONFIG_DIR` environment variable
//! 4. Falls back to the platform config directory
//!
//! # Examples
//!
//! ```no_run
//! use term_marquee::app::config;
//! use term_marquee::ui::theme::ThemeName;
//!
//! let (mut config, _warning) = config::load();
//! config.theme_name = ThemeName::Green;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::layout::LayoutMetrics;
use crate::ui::theme::ThemeName;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_theme_name", deserialize_with = "deserialize_theme_name")]
    pub theme_name: ThemeName,
    #[serde(
        default = "default_interval_seconds",
        deserialize_with = "deserialize_interval_seconds"
    )]
    pub interval_seconds: u32,
    #[serde(default = "default_width", deserialize_with = "deserialize_width")]
    pub width: u32,
    #[serde(default = "default_height", deserialize_with = "deserialize_height")]
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: DEFAULT_THEME_NAME,
            interval_seconds: DEFAULT_INTERVAL_SECS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Config {
    #[must_use]
    pub fn layout(&self) -> LayoutMetrics {
        LayoutMetrics {
            width: self.width,
            height: self.height,
        }
    }

    pub fn set_layout(&mut self, metrics: LayoutMetrics) {
        self.width = metrics.width;
        self.height = metrics.height;
    }
}

fn default_theme_name() -> ThemeName {
    DEFAULT_THEME_NAME
}

fn default_interval_seconds() -> u32 {
    DEFAULT_INTERVAL_SECS
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

fn deserialize_theme_name<'de, D>(deserializer: D) -> std::result::Result<ThemeName, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.parse().unwrap_or_else(|error| {
        tracing::warn!(%error, fallback = %DEFAULT_THEME_NAME, "ignoring theme_name");
        DEFAULT_THEME_NAME
    }))
}

/// Reads a signed integer so that `0` or `-5` fall back instead of failing
/// the whole file.
fn positive_or<'de, D>(deserializer: D, field: &str, fallback: u32) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    match u32::try_from(raw) {
        Ok(value) if value > 0 => Ok(value),
        _ => {
            tracing::warn!(field, value = raw, fallback, "ignoring out-of-range value");
            Ok(fallback)
        }
    }
}

fn deserialize_interval_seconds<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    positive_or(deserializer, "interval_seconds", DEFAULT_INTERVAL_SECS)
}

fn deserialize_width<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    positive_or(deserializer, "width", DEFAULT_WIDTH)
}

fn deserialize_height<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    positive_or(deserializer, "height", DEFAULT_HEIGHT)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional directory override.
#[must_use]
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    match config_path_with_override(base_dir) {
        Some(path) => load_or_default(&path),
        None => (Config::default(), None),
    }
}

/// Loads `path`, substituting the defaults when it is missing or unreadable.
pub fn load_or_default(path: &Path) -> (Config, Option<String>) {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return (Config::default(), None);
    }
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "settings unreadable, using defaults");
            (Config::default(), Some(error.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let path = config_path_with_override(base_dir)
        .ok_or_else(|| Error::Config("no config directory available".to_string()))?;
    save_to_path(config, &path)
}

/// Saves the configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
