// SPDX-License-Identifier: MPL-2.0
//! This module reads the user preferences stored in a `settings.toml` file.
//! The application never writes the file; users edit it by hand.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[display]` - Layout orientation preference
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `ART_SPACE_CONFIG_DIR` environment variable or pass `--config-dir`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use art_space::config;
//!
//! // Load existing configuration (returns tuple with optional error)
//! let (config, error) = config::load();
//! if let Some(err) = error {
//!     eprintln!("Using default settings: {err}");
//! }
//! println!("{:?}", config.display.orientation);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::gallery::OrientationPreference;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Display settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct DisplayConfig {
    /// Gallery layout orientation; `auto` follows the window shape.
    #[serde(default)]
    pub orientation: OrientationPreference,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_error). A missing file is not an
/// error; an unreadable or invalid one yields the default config alongside
/// the error so startup can continue.
pub fn load() -> (Config, Option<Error>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<Error>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            log::debug!("Reading settings from {}", path.display());
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => return (Config::default(), Some(err)),
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}
