//! Layout command handlers
//!
//! Open, save and close whole layouts, and add tools to the installed one.
//! File pickers and file I/O are side effects: handlers return a `Cmd` and the
//! runtime answers with a result message.

use std::path::{Path, PathBuf};

use crate::commands::Cmd;
use crate::dock::DockState;
use crate::messages::LayoutMsg;
use crate::model::AppModel;
use crate::recent_layouts::LayoutAccess;
use crate::view::tool_content;

/// Update function for layout messages
pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::OpenLayout => Some(Cmd::ShowOpenLayoutDialog {
            start_dir: model.dialog_start_dir(),
        }),

        LayoutMsg::SaveLayout => {
            if !model.has_layout() {
                model.set_status("No layout to save");
                return Some(Cmd::Redraw);
            }
            Some(Cmd::ShowSaveLayoutDialog {
                start_dir: model.dialog_start_dir(),
                suggested_name: model.config.suggested_file(),
                default_extension: model.config.default_extension.clone(),
            })
        }

        LayoutMsg::CloseLayout => {
            if model.layout.take().is_some() {
                model.layout_path = None;
                tracing::info!("Closed layout");
                model.set_status("Layout closed");
            }
            Some(Cmd::Redraw)
        }

        LayoutMsg::NewTool => new_tool(model),

        LayoutMsg::OpenLayoutFile(path) => Some(Cmd::ReadLayout { path }),

        LayoutMsg::SaveLayoutFile(path) => write_layout(model, path),

        // Cancelled pickers end the operation without touching anything
        LayoutMsg::OpenDialogResult { path } => path.map(|path| Cmd::ReadLayout { path }),

        LayoutMsg::SaveDialogResult { path } => {
            let path = path?;
            write_layout(model, path)
        }

        LayoutMsg::LayoutRead { path, result } => {
            match result {
                Ok(bytes) => install_layout(model, path, &bytes),
                Err(e) => {
                    tracing::warn!("Failed to read layout {}: {}", path.display(), e);
                    model.set_error(format!("Error reading {}: {}", display_name(&path), e));
                }
            }
            Some(Cmd::Redraw)
        }

        LayoutMsg::LayoutWritten { path, result } => {
            match result {
                Ok(()) => {
                    tracing::info!("Saved layout to {}", path.display());
                    if let Some(state) = model.take_pending_dock_state(&path) {
                        model.dock_state = Some(state);
                    }
                    model.set_status(format!("Saved: {}", path.display()));
                    model.recent.add(path.clone(), LayoutAccess::Saved);
                    model.layout_path = Some(path);
                    model.save_recent();
                }
                Err(e) => {
                    tracing::warn!("Failed to write layout {}: {}", path.display(), e);
                    model.take_pending_dock_state(&path);
                    model.set_error(format!("Error saving {}: {}", display_name(&path), e));
                }
            }
            Some(Cmd::Redraw)
        }
    }
}

/// Add a tool to the first visible right-aligned tool dock and activate it
fn new_tool(model: &mut AppModel) -> Option<Cmd> {
    let tree = model.layout.as_mut()?;
    let result = model.factory.add_tool_to_right_dock(
        tree,
        &model.config.new_tool_id,
        &model.config.new_tool_title,
        Some(tool_content()),
    );
    match result {
        Ok(Some(tool)) => {
            tracing::info!(id = %tree[tool].id, "Added tool to right dock");
            model.set_status(format!("Added {}", model.config.new_tool_title));
            Some(Cmd::Redraw)
        }
        // A layout without a right tool dock simply has nowhere to put it
        Ok(None) => None,
        Err(e) => {
            tracing::error!("Failed to add tool: {}", e);
            model.set_error(format!("Failed to add tool: {}", e));
            Some(Cmd::Redraw)
        }
    }
}

/// Serialize the installed layout and capture its transient state
///
/// The captured state replaces `dock_state` only once the write succeeds.
fn write_layout(model: &mut AppModel, path: PathBuf) -> Option<Cmd> {
    let Some(tree) = model.layout.as_ref() else {
        model.set_status("No layout to save");
        return Some(Cmd::Redraw);
    };

    match model.serializer.to_vec(tree) {
        Ok(bytes) => {
            model.pending_dock_state = Some((path.clone(), DockState::save(tree)));
            Some(Cmd::WriteLayout { path, bytes })
        }
        Err(e) => {
            tracing::warn!("Failed to serialize layout: {}", e);
            model.set_error(format!("Error saving {}: {}", display_name(&path), e));
            Some(Cmd::Redraw)
        }
    }
}

/// Parse a layout file and install it, re-applying captured dock state
///
/// On failure the current layout stays installed.
fn install_layout(model: &mut AppModel, path: PathBuf, bytes: &[u8]) {
    let mut tree = match model.serializer.from_slice(bytes) {
        Ok(tree) => tree,
        Err(e) => {
            tracing::warn!("Failed to load layout {}: {}", path.display(), e);
            model.set_error(e.user_message(&display_name(&path)));
            return;
        }
    };

    if let Some(state) = model.dock_state.take() {
        state.restore(&mut tree, &model.factory);
    }

    tracing::info!(nodes = tree.len(), "Opened layout {}", path.display());
    model.layout = Some(tree);
    model.set_status(format!("Opened: {}", path.display()));
    model.recent.add(path.clone(), LayoutAccess::Opened);
    model.layout_path = Some(path);
    model.save_recent();
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
