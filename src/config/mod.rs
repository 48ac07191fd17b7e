// SPDX-License-Identifier: MPL-2.0
//! This module handles the library demo's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_bloom::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedBloom";

/// Offscreen travel distance used for a toast whose surface has not been
/// measured yet. Overridable per toast via `ToastOptions::offscreen_travel`.
pub const DEFAULT_OFFSCREEN_TRAVEL: f32 = 500.0;

/// Clamp bounds for the auto-dismiss delay, in milliseconds.
pub const MIN_AUTO_DISMISS_MS: u64 = 500;
pub const MAX_AUTO_DISMISS_MS: u64 = 60_000;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: Option<ThemeMode>,
    /// Default offscreen travel for unmeasured toasts, in logical pixels.
    #[serde(default)]
    pub offscreen_travel: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: Some(ThemeMode::System),
            offscreen_travel: Some(DEFAULT_OFFSCREEN_TRAVEL),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
