// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[api]` - Backend base URL, CSRF cookie name, failure reporting
//! - `[notifications]` - Toast duration and exit transition
//!
//! # Path Resolution
//!
//! 1. Explicit directory passed to `load_with_override()` / `save_with_override()`
//! 2. `TRAVEL_DESK_CONFIG_DIR` environment variable
//! 3. Platform-specific config directory from `dirs`
//!
//! # Examples
//!
//! ```no_run
//! use travel_desk::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.api.base_url = "https://bookings.example.com".to_string();
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "TravelDesk";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TRAVEL_DESK_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Scheme, host and port of the booking backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the cookie carrying the anti-forgery token.
    #[serde(default = "default_csrf_cookie")]
    pub csrf_cookie: String,

    /// Whether rejected requests are reported as error toasts.
    #[serde(default = "default_notify_on_failure")]
    pub notify_on_failure: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            csrf_cookie: default_csrf_cookie(),
            notify_on_failure: default_notify_on_failure(),
        }
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    /// Time a toast stays visible before auto-removal starts.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Exit transition length before the toast is detached.
    #[serde(default = "default_exit_transition_ms")]
    pub exit_transition_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            exit_transition_ms: DEFAULT_TOAST_EXIT_MS,
        }
    }
}

impl NotificationConfig {
    /// Display duration, clamped to the supported range.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(
            self.duration_ms
                .clamp(MIN_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS),
        )
    }

    #[must_use]
    pub fn exit_transition(&self) -> Duration {
        Duration::from_millis(self.exit_transition_ms)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_csrf_cookie() -> String {
    DEFAULT_CSRF_COOKIE.to_string()
}

fn default_notify_on_failure() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION_MS
}

fn default_exit_transition_ms() -> u64 {
    DEFAULT_TOAST_EXIT_MS
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the application config directory, honoring overrides.
#[must_use]
pub fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if base_dir.is_some() {
        return base_dir;
    }
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Failed to read {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("Could not read settings, using defaults".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// Unparseable TOML yields the default configuration; only I/O failures are errors.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("Invalid settings file {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
