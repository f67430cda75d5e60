//! Transient dock state capture and restore
//!
//! Layout files carry structure only. Which panel was active, which one had
//! focus and which tools were pinned is captured here, keyed by dockable id,
//! and re-applied to a freshly loaded tree through the factory.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::factory::Factory;
use super::node::NodeId;
use super::tree::DockTree;

/// Transient flags for a single dockable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DockableState {
    /// Selected child of its owner
    pub is_active: bool,
    /// On the focus path
    pub is_focused: bool,
    pub is_pinned: bool,
}

/// Snapshot of transient state, keyed by dockable id
///
/// Carries no structure. Restoring consumes the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DockState {
    entries: HashMap<String, DockableState>,
}

impl DockState {
    /// Capture flags for every node reachable from the root
    ///
    /// Duplicate ids overwrite earlier entries in traversal order.
    pub fn save(tree: &DockTree) -> Self {
        let entries = tree
            .iter()
            .map(|id| {
                let node = &tree[id];
                let state = DockableState {
                    is_active: tree.is_active(id),
                    is_focused: node.is_focused(),
                    is_pinned: node.is_pinned(),
                };
                (node.id.clone(), state)
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&DockableState> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-apply captured flags to `tree`, returning how many nodes matched
    ///
    /// Nodes without an entry keep their current state; entries without a
    /// matching node are ignored. All changes go through `factory`.
    pub fn restore(self, tree: &mut DockTree, factory: &Factory) -> usize {
        let matched: Vec<(NodeId, DockableState)> = tree
            .iter()
            .filter_map(|id| self.entries.get(&tree[id].id).map(|state| (id, *state)))
            .collect();

        for &(id, state) in &matched {
            if state.is_active {
                factory.activate(tree, id);
            } else {
                factory.deactivate(tree, id);
            }
            if state.is_pinned {
                factory.pin_dockable(tree, id);
            } else {
                factory.unpin_dockable(tree, id);
            }
        }

        // Pre-order visits a focus path top-down, so the last hit is the deepest
        let focus_target = matched
            .iter()
            .rev()
            .find(|(_, state)| state.is_focused)
            .map(|&(id, _)| id);
        match focus_target {
            Some(id) => factory.set_focused_dockable(tree, id),
            None => {
                let focused_is_known = tree
                    .focused_dockable()
                    .is_some_and(|f| self.entries.contains_key(&tree[f].id));
                if focused_is_known {
                    factory.clear_focus(tree);
                }
            }
        }

        tracing::debug!(
            matched = matched.len(),
            captured = self.entries.len(),
            "restored dock state"
        );
        matched.len()
    }
}
