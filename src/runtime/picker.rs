//! File pickers for opening and saving layouts
//!
//! The runtime talks to a [`FilePicker`] so the native dialogs can be swapped
//! out in headless sessions and tests.

use std::path::{Path, PathBuf};

/// A named group of file extensions offered by a picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

/// Filters offered when opening or saving a layout
pub const LAYOUT_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "Json",
        extensions: &["json"],
    },
    FileFilter {
        name: "All",
        extensions: &["*"],
    },
];

/// Source of file paths chosen by the user
///
/// Both methods block until the user answers; `None` means cancelled.
pub trait FilePicker: Send + Sync {
    fn pick_open_file(&self, filters: &[FileFilter], start_dir: Option<&Path>) -> Option<PathBuf>;

    /// Ask for a save target; a chosen name without extension gets `default_extension`
    fn pick_save_file(
        &self,
        filters: &[FileFilter],
        start_dir: Option<&Path>,
        suggested_name: &str,
        default_extension: &str,
    ) -> Option<PathBuf>;
}

/// Native dialogs via rfd
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePicker;

impl NativePicker {
    fn dialog(title: &str, filters: &[FileFilter], start_dir: Option<&Path>) -> rfd::FileDialog {
        let mut dlg = rfd::FileDialog::new().set_title(title);
        for filter in filters {
            dlg = dlg.add_filter(filter.name, filter.extensions);
        }
        if let Some(dir) = start_dir {
            dlg = dlg.set_directory(dir);
        }
        dlg
    }
}

impl FilePicker for NativePicker {
    fn pick_open_file(&self, filters: &[FileFilter], start_dir: Option<&Path>) -> Option<PathBuf> {
        Self::dialog("Open layout", filters, start_dir).pick_file()
    }

    fn pick_save_file(
        &self,
        filters: &[FileFilter],
        start_dir: Option<&Path>,
        suggested_name: &str,
        default_extension: &str,
    ) -> Option<PathBuf> {
        Self::dialog("Save layout", filters, start_dir)
            .set_file_name(suggested_name)
            .save_file()
            .map(|path| with_default_extension(path, default_extension))
    }
}

/// Picker for sessions without a display: every request is cancelled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDialogs;

impl FilePicker for NoDialogs {
    fn pick_open_file(&self, _: &[FileFilter], _: Option<&Path>) -> Option<PathBuf> {
        tracing::debug!("open picker unavailable");
        None
    }

    fn pick_save_file(&self, _: &[FileFilter], _: Option<&Path>, _: &str, _: &str) -> Option<PathBuf> {
        tracing::debug!("save picker unavailable");
        None
    }
}

/// Append `extension` when the chosen path has none
pub fn with_default_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    if path.extension().is_none() && !extension.is_empty() {
        path.set_extension(extension);
    }
    path
}
