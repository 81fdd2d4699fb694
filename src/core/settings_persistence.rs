//! Settings persistence
//!
//! Saves and loads [`TransitionSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! `transitions.json` in the user's configuration directory, e.g.
//! `~/.config/xfchess/transitions.json` on Linux. Falls back to the working
//! directory when no config directory can be determined.
//!
//! # Error Handling
//!
//! [`load_settings`] never fails: missing or unreadable files fall back to
//! defaults with a warning. The explicit-path variants return errors so callers
//! (and tests) can tell what went wrong.

use crate::core::error::SettingsResult;
use crate::core::resources::TransitionSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "transitions.json";

/// Resolve the settings file path
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "XFChess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        // Fallback to current directory
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and validate settings from `path`
pub fn load_from(path: &Path) -> SettingsResult<TransitionSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: TransitionSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Validate and write settings to `path`, creating parent directories
pub fn save_to(path: &Path, settings: &TransitionSettings) -> SettingsResult<()> {
    settings.validate()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load settings from the default location, falling back to defaults
pub fn load_settings() -> TransitionSettings {
    let path = settings_path();

    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return TransitionSettings::default();
    }

    match load_from(&path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("[SETTINGS] Failed to load settings at {:?}: {}. Using defaults.", path, e);
            TransitionSettings::default()
        }
    }
}

/// Save settings to the default location, returning where they were written
pub fn save_settings(settings: &TransitionSettings) -> SettingsResult<PathBuf> {
    let path = settings_path();
    save_to(&path, settings)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(path)
}
