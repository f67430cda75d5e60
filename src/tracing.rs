//! Logging infrastructure
//!
//! Provides structured logging with scoped filtering for the dock model and
//! the layout commands that drive it.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=dock_layout::dock=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dock-layout/logs/dock-layout.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::dock::DockTree;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`); the file layer always
/// logs at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dock-layout.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of a tree's selection state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSnapshot {
    pub node_count: usize,
    pub focused: Option<String>,
    /// (container id, active child id) for every container with a selection
    pub active: Vec<(String, String)>,
}

impl SelectionSnapshot {
    pub fn from_tree(tree: &DockTree) -> Self {
        let active = tree
            .iter()
            .filter_map(|id| {
                let child = tree.active_dockable(id)?;
                Some((tree[id].id.clone(), tree[child].id.clone()))
            })
            .collect();
        Self {
            node_count: tree.len(),
            focused: tree.focused_dockable().map(|id| tree[id].id.clone()),
            active,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.node_count != other.node_count {
            changes.push(format!(
                "nodes: {} → {}",
                self.node_count, other.node_count
            ));
        }
        if self.focused != other.focused {
            changes.push(format!(
                "focus: {} → {}",
                self.focused.as_deref().unwrap_or("-"),
                other.focused.as_deref().unwrap_or("-")
            ));
        }
        for (container, child) in &other.active {
            let before = self
                .active
                .iter()
                .find(|(c, _)| c == container)
                .map(|(_, a)| a.as_str());
            if before != Some(child.as_str()) {
                changes.push(format!(
                    "{}: active {} → {}",
                    container,
                    before.unwrap_or("-"),
                    child
                ));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
