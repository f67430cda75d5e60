//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them and feeds results back as messages.

use std::path::PathBuf;

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command
    #[default]
    None,
    /// Redraw the layout
    Redraw,
    /// Show the open-layout file picker
    ShowOpenLayoutDialog { start_dir: Option<PathBuf> },
    /// Show the save-layout file picker
    ShowSaveLayoutDialog {
        start_dir: Option<PathBuf>,
        suggested_name: String,
        default_extension: String,
    },
    /// Read a layout file and report back with `LayoutMsg::LayoutRead`
    ReadLayout { path: PathBuf },
    /// Write serialized layout bytes and report back with `LayoutMsg::LayoutWritten`
    WriteLayout { path: PathBuf, bytes: Vec<u8> },
    /// Quit the application
    Quit,
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::None
            | Cmd::ShowOpenLayoutDialog { .. }
            | Cmd::ShowSaveLayoutDialog { .. }
            | Cmd::ReadLayout { .. }
            | Cmd::WriteLayout { .. }
            | Cmd::Quit => false,
        }
    }
}
