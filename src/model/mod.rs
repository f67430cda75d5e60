//! Application model - the complete state of the layout application
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod status;

pub use status::{StatusKind, StatusMessage};

use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;
use crate::dock::layouts::default_layout;
use crate::dock::{DockState, DockTree, Factory, LayoutSerializer};
use crate::recent_layouts::RecentLayouts;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Installed layout; `None` after the layout has been closed
    pub layout: Option<DockTree>,
    /// Mutation authority for `layout`
    pub factory: Factory,
    /// Structural encoder for layout files
    pub serializer: LayoutSerializer,
    /// Transient state captured at the last save, consumed by the next open
    pub dock_state: Option<DockState>,
    /// State captured for a save still being written, with its target path
    pub pending_dock_state: Option<(PathBuf, DockState)>,
    /// File the installed layout was last read from or written to
    pub layout_path: Option<PathBuf>,
    /// Persisted configuration
    pub config: LayoutConfig,
    /// Recently opened and saved layout files
    pub recent: RecentLayouts,
    /// Where `recent` is persisted; `None` keeps it in memory only
    pub recent_path: Option<PathBuf>,
    /// Latest status line message
    pub status: Option<StatusMessage>,
}

impl AppModel {
    /// Create a model with the built-in default layout installed
    ///
    /// The default layout's transient state is captured right away so that the
    /// first layout opened picks up the same selection.
    pub fn new(config: LayoutConfig) -> Self {
        let factory = Factory::new();
        let layout = match default_layout(&factory) {
            Ok(tree) => Some(tree),
            Err(e) => {
                tracing::error!("Failed to build default layout: {}", e);
                None
            }
        };
        let dock_state = layout.as_ref().map(DockState::save);

        Self {
            layout,
            dock_state,
            ..Self::empty(config)
        }
    }

    /// Create a model with no layout installed
    pub fn empty(config: LayoutConfig) -> Self {
        let serializer = LayoutSerializer::new().pretty(config.pretty_json);
        Self {
            layout: None,
            factory: Factory::new(),
            serializer,
            dock_state: None,
            pending_dock_state: None,
            layout_path: None,
            config,
            recent: RecentLayouts::default(),
            recent_path: None,
            status: None,
        }
    }

    /// Load the recent layouts list from `path` and persist updates there
    pub fn attach_recent_store(&mut self, path: PathBuf) {
        self.recent = RecentLayouts::load_from(&path);
        self.recent_path = Some(path);
    }

    /// Write the recent layouts list to its store, if one is attached
    pub fn save_recent(&self) {
        let Some(path) = &self.recent_path else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::debug!("Could not create {}: {}", parent.display(), e);
                return;
            }
        }
        if let Err(e) = self.recent.save_to(path) {
            tracing::debug!("Could not persist recent layouts: {}", e);
        }
    }

    /// Take the state captured for a save to `path`, if that save is still pending
    pub fn take_pending_dock_state(&mut self, path: &Path) -> Option<DockState> {
        let for_path = self
            .pending_dock_state
            .as_ref()
            .is_some_and(|(pending, _)| pending == path);
        if !for_path {
            return None;
        }
        self.pending_dock_state.take().map(|(_, state)| state)
    }

    pub fn has_layout(&self) -> bool {
        self.layout.is_some()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::info(text));
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::error(text));
    }

    /// Status message, if one is present and not expired
    pub fn current_status(&self) -> Option<&StatusMessage> {
        self.status.as_ref().filter(|s| !s.is_expired())
    }

    /// Directory file pickers should start in
    pub fn dialog_start_dir(&self) -> Option<PathBuf> {
        self.layout_path
            .as_ref()
            .and_then(|p| p.parent().map(PathBuf::from))
            .or_else(|| {
                self.recent
                    .latest()
                    .and_then(|e| e.path.parent().map(PathBuf::from))
            })
            .or_else(crate::config_paths::layouts_dir)
    }
}
