//! Layout application configuration
//!
//! Stores user preferences in `~/.config/dock-layout/config.yaml`

use serde::{Deserialize, Serialize};

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Id given to tools created from the "New tool" command
    #[serde(default = "default_new_tool_id")]
    pub new_tool_id: String,

    /// Title given to tools created from the "New tool" command
    #[serde(default = "default_new_tool_title")]
    pub new_tool_title: String,

    /// File name offered by the save dialog (without extension)
    #[serde(default = "default_suggested_file_name")]
    pub suggested_file_name: String,

    /// Extension appended by the save dialog
    #[serde(default = "default_extension")]
    pub default_extension: String,

    /// Indent layout files when saving
    #[serde(default = "default_pretty")]
    pub pretty_json: bool,
}

fn default_new_tool_id() -> String {
    "ID of MenuTool".to_string()
}

fn default_new_tool_title() -> String {
    "MenuTool".to_string()
}

fn default_suggested_file_name() -> String {
    "layout".to_string()
}

fn default_extension() -> String {
    "json".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            new_tool_id: default_new_tool_id(),
            new_tool_title: default_new_tool_title(),
            suggested_file_name: default_suggested_file_name(),
            default_extension: default_extension(),
            pretty_json: default_pretty(),
        }
    }
}

impl LayoutConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse YAML config text; missing fields take their defaults
    pub fn parse(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Suggested save file name including extension, e.g. `layout.json`
    pub fn suggested_file(&self) -> String {
        if self.default_extension.is_empty() {
            self.suggested_file_name.clone()
        } else {
            format!("{}.{}", self.suggested_file_name, self.default_extension)
        }
    }
}
