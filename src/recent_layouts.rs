//! Persistent list of recently used layout files
//!
//! Layout files opened or saved are kept in MRU (most recently used) order
//! with a capacity limit, in `~/.config/dock-layout/recent.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Maximum number of entries to keep
const MAX_ENTRIES: usize = 20;

/// How a layout file was last touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutAccess {
    Opened,
    Saved,
}

/// A single entry in the recent layouts list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentLayout {
    /// Absolute path to the layout file
    pub path: PathBuf,
    /// Timestamp of last use (Unix epoch seconds)
    pub used_at: u64,
    pub access: LayoutAccess,
}

impl RecentLayout {
    pub fn new(path: PathBuf, access: LayoutAccess) -> Self {
        Self {
            path,
            used_at: now_epoch_secs(),
            access,
        }
    }

    /// File name for menus, falling back to the full path
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Persistent recent layouts list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentLayouts {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    /// Most recent first
    pub entries: Vec<RecentLayout>,
}

impl RecentLayouts {
    pub const CURRENT_VERSION: u32 = 1;

    /// Load from an explicit file; unreadable or invalid files yield an empty list
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let mut recent: Self = serde_json::from_str(&contents).unwrap_or_else(|e| {
                    tracing::warn!("Ignoring invalid recent list {}: {}", path.display(), e);
                    Self::default()
                });
                recent.prune_missing();
                recent
            }
            Err(_) => Self::default(),
        }
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
    }

    /// Record a layout file (or move it to the front if already present)
    pub fn add(&mut self, path: PathBuf, access: LayoutAccess) {
        let canonical = path.canonicalize().unwrap_or(path);

        if let Some(idx) = self.find_index(&canonical) {
            self.entries.remove(idx);
        }
        self.entries.insert(0, RecentLayout::new(canonical, access));
        self.entries.truncate(MAX_ENTRIES);
        self.version = Self::CURRENT_VERSION;
    }

    /// Most recently used layout, if any
    pub fn latest(&self) -> Option<&RecentLayout> {
        self.entries.first()
    }

    /// Prune entries for files that no longer exist
    pub fn prune_missing(&mut self) {
        let original_len = self.entries.len();
        self.entries.retain(|e| e.exists());
        if self.entries.len() != original_len {
            tracing::debug!(
                "Pruned {} missing layouts from recent list",
                original_len - self.entries.len()
            );
        }
    }

    fn find_index(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }
}
