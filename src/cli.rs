//! Command-line argument parsing
//!
//! Supports:
//! - Opening a layout file at startup
//! - Starting without the built-in layout
//! - Headless sessions without native file pickers

use clap::Parser;
use std::path::PathBuf;

/// Dock layout manager
#[derive(Parser, Debug)]
#[command(name = "dock-layout", version, about = "Open, edit and save dock layouts")]
pub struct CliArgs {
    /// Layout file to open at startup
    #[arg(value_name = "LAYOUT")]
    pub layout: Option<PathBuf>,

    /// Start without the built-in default layout
    #[arg(short = 'n', long)]
    pub new: bool,

    /// Never show native file pickers (open/save then need a path)
    #[arg(long)]
    pub no_dialogs: bool,
}

/// What is installed before the first menu action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupMode {
    /// The built-in default layout
    DefaultLayout,
    /// No layout at all
    Empty,
    /// A layout file, opened on top of the startup layout
    OpenFile { path: PathBuf, keep_default: bool },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: StartupMode,
    /// Whether native file pickers may be shown
    pub dialogs: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let mode = match self.layout {
            Some(path) if path.is_dir() => {
                return Err(format!("{} is a directory, not a layout file", path.display()))
            }
            Some(path) => StartupMode::OpenFile {
                path,
                keep_default: !self.new,
            },
            None if self.new => StartupMode::Empty,
            None => StartupMode::DefaultLayout,
        };

        Ok(StartupConfig {
            mode,
            dialogs: !self.no_dialogs,
        })
    }
}

impl StartupConfig {
    /// Whether the built-in layout should be installed first
    pub fn wants_default_layout(&self) -> bool {
        match &self.mode {
            StartupMode::DefaultLayout => true,
            StartupMode::Empty => false,
            StartupMode::OpenFile { keep_default, .. } => *keep_default,
        }
    }

    /// Layout file to open once the model exists
    pub fn layout_file(&self) -> Option<&PathBuf> {
        match &self.mode {
            StartupMode::OpenFile { path, .. } => Some(path),
            _ => None,
        }
    }
}
