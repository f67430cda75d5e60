//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

/// Layout menu commands and the results of the side effects they trigger
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    // === Menu commands ===
    /// File → Open layout (shows a file picker)
    OpenLayout,
    /// File → Save layout (shows a save picker)
    SaveLayout,
    /// File → Close layout
    CloseLayout,
    /// File → New tool: add a tool to the right tool dock, if there is one
    NewTool,

    // === Direct file access (no picker) ===
    /// Open a layout file at a known path
    OpenLayoutFile(PathBuf),
    /// Save the current layout to a known path
    SaveLayoutFile(PathBuf),

    // === Side-effect results ===
    /// Open picker closed; `None` means the user cancelled
    OpenDialogResult { path: Option<PathBuf> },
    /// Save picker closed; `None` means the user cancelled
    SaveDialogResult { path: Option<PathBuf> },
    /// Layout file contents were read (or failed to read)
    LayoutRead {
        path: PathBuf,
        result: Result<Vec<u8>, String>,
    },
    /// Layout file was written (or failed to write)
    LayoutWritten {
        path: PathBuf,
        result: Result<(), String>,
    },
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// A side-effect worker panicked before reporting its result
    TaskFailed { task: String },
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Layout(LayoutMsg),
    App(AppMsg),
}
