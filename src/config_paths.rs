//! Where dock-layout keeps its files
//!
//! ```text
//! <config home>/dock-layout/
//! ├── config.yaml   preferences
//! ├── recent.json   recently opened and saved layouts
//! ├── layouts/      start directory for the file pickers
//! └── logs/         daily rotated log files
//! ```
//!
//! The config home is `$XDG_CONFIG_HOME` (falling back to `~/.config`) on Unix
//! and macOS, and `%APPDATA%` on Windows.

use std::env;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "dock-layout";

pub fn config_dir() -> Option<PathBuf> {
    let home = if cfg!(target_os = "windows") {
        dirs::config_dir()
    } else {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
    };
    home.map(|h| h.join(APP_DIR))
}

fn entry(name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(name))
}

pub fn config_file() -> Option<PathBuf> {
    entry("config.yaml")
}

pub fn recent_layouts_path() -> Option<PathBuf> {
    entry("recent.json")
}

pub fn layouts_dir() -> Option<PathBuf> {
    entry("layouts")
}

/// Create `dir` with its parents and hand it back
fn create(dir: Option<PathBuf>) -> Result<PathBuf, String> {
    let dir = dir.ok_or_else(|| "no home directory to put it in".to_string())?;
    fs::create_dir_all(&dir).map_err(|e| format!("cannot create {}: {}", dir.display(), e))?;
    Ok(dir)
}

pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    create(entry("logs"))
}

/// Make sure the pickers' start directory exists; failure only costs that default
pub fn prepare_layouts_dir() {
    match create(layouts_dir()) {
        Ok(dir) => tracing::debug!(dir = %dir.display(), "layouts directory ready"),
        Err(e) => tracing::warn!("layouts directory unavailable: {}", e),
    }
}
