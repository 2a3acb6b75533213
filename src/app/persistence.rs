// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.

use crate::config::{self, Config};
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Stores the chosen theme mode in `settings.toml`.
///
/// Skipped under test so unit tests never touch the user's config.
pub fn persist_theme(config: &mut Config, config_dir: Option<PathBuf>, theme_mode: ThemeMode) {
    config.general.theme_mode = theme_mode;

    if cfg!(test) {
        return;
    }

    if let Err(error) = config::save_with_override(config, config_dir) {
        log::error!("Failed to save config: {error}");
    }
}
