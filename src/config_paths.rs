//! Centralized configuration paths for scrawl
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/scrawl/`
//! - Windows: `%APPDATA%\scrawl\`
//!
//! This module is the single source of truth for config paths.

use std::{env, path::PathBuf};

const APP_DIR: &str = "scrawl";

/// Base config directory for scrawl
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/scrawl`
///   - Else: `~/.config/scrawl`
///
/// Windows:
///   - `%APPDATA%\scrawl`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/scrawl/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}
