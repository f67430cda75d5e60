//! Factory - the single mutation authority over a dock tree
//!
//! Creates dockables, attaches and detaches them, and keeps the per-container
//! active child and the global focus path consistent. The factory holds no
//! reference to any tree; callers pass the tree they want mutated.

use super::error::DockError;
use super::node::{Alignment, Content, Dockable, DockableKind, NodeId, Orientation};
use super::tree::DockTree;

/// Creates and mutates dockables inside a [`DockTree`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Factory;

impl Factory {
    pub fn new() -> Self {
        Self
    }

    // ========================================================================
    // Creation
    // ========================================================================

    /// Create a detached tool with no content
    pub fn create_tool(&self, tree: &mut DockTree, id: &str, title: &str) -> NodeId {
        tree.alloc(Dockable::new(DockableKind::Tool, id, title))
    }

    /// Create a detached document with no content
    pub fn create_document(&self, tree: &mut DockTree, id: &str, title: &str) -> NodeId {
        tree.alloc(Dockable::new(DockableKind::Document, id, title))
    }

    /// Create a detached tool dock with a fixed alignment
    pub fn create_tool_dock(
        &self,
        tree: &mut DockTree,
        id: &str,
        title: &str,
        alignment: Alignment,
    ) -> NodeId {
        let mut node = Dockable::new(DockableKind::ToolDock, id, title);
        node.alignment = alignment;
        tree.alloc(node)
    }

    pub fn create_document_dock(&self, tree: &mut DockTree, id: &str, title: &str) -> NodeId {
        tree.alloc(Dockable::new(DockableKind::DocumentDock, id, title))
    }

    pub fn create_proportional_dock(
        &self,
        tree: &mut DockTree,
        id: &str,
        title: &str,
        orientation: Orientation,
    ) -> NodeId {
        let mut node = Dockable::new(DockableKind::ProportionalDock, id, title);
        node.orientation = orientation;
        tree.alloc(node)
    }

    /// Attach a deferred view factory; it is never evaluated here
    pub fn set_content(&self, tree: &mut DockTree, dockable: NodeId, content: Content) {
        if let Some(node) = tree.get_mut(dockable) {
            node.content = Some(content);
        }
    }

    // ========================================================================
    // Structure
    // ========================================================================

    /// Append `dockable` to `container`
    ///
    /// The container's active child is left unchanged.
    pub fn add_dockable(
        &self,
        tree: &mut DockTree,
        container: NodeId,
        dockable: NodeId,
    ) -> Result<(), DockError> {
        tree.add(container, dockable, None)?;
        tracing::debug!(
            container = %tree[container].id,
            dockable = %tree[dockable].id,
            "added dockable"
        );
        Ok(())
    }

    /// Insert `dockable` into `container` at `index`
    pub fn insert_dockable(
        &self,
        tree: &mut DockTree,
        container: NodeId,
        dockable: NodeId,
        index: usize,
    ) -> Result<(), DockError> {
        tree.add(container, dockable, Some(index))?;
        tracing::debug!(
            container = %tree[container].id,
            dockable = %tree[dockable].id,
            index,
            "inserted dockable"
        );
        Ok(())
    }

    /// Detach `dockable` from its owner
    ///
    /// If it was the owner's active child, the previous sibling (or the new
    /// first child) becomes active.
    pub fn close_dockable(&self, tree: &mut DockTree, dockable: NodeId) -> Result<(), DockError> {
        let Some(owner) = tree.owner(dockable) else {
            return Err(DockError::InvalidTarget(dockable));
        };
        let was_active = tree.is_active(dockable);
        let index = tree.remove(owner, dockable)?;

        if was_active {
            let siblings = tree.children(owner);
            let next = siblings
                .get(index.saturating_sub(1))
                .or_else(|| siblings.first())
                .copied();
            if let Some(next) = next {
                self.activate(tree, next);
            }
        }
        tracing::debug!(dockable = %tree[dockable].id, "closed dockable");
        Ok(())
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Make `dockable` the active child of its owner, without moving focus
    ///
    /// No-op for detached nodes or nodes in an orphaned subtree.
    pub fn activate(&self, tree: &mut DockTree, dockable: NodeId) {
        let Some(owner) = tree.owner(dockable) else {
            return;
        };
        if !tree.is_attached(owner) {
            return;
        }
        if let Some(container) = tree.get_mut(owner) {
            container.active = Some(dockable);
        }
    }

    /// Clear the owner's active child if it is `dockable`
    pub fn deactivate(&self, tree: &mut DockTree, dockable: NodeId) {
        let Some(owner) = tree.owner(dockable) else {
            return;
        };
        if let Some(container) = tree.get_mut(owner) {
            if container.active == Some(dockable) {
                container.active = None;
            }
        }
    }

    /// Select `dockable` at every level of its owner chain and focus it
    ///
    /// Detached or orphaned nodes are inert: the call does nothing.
    pub fn set_active_dockable(&self, tree: &mut DockTree, dockable: NodeId) {
        if tree.owner(dockable).is_none() || !tree.is_attached(dockable) {
            tracing::debug!(index = dockable.index(), "ignoring activation of detached dockable");
            return;
        }

        let mut child = dockable;
        while let Some(owner) = tree.owner(child) {
            if let Some(container) = tree.get_mut(owner) {
                container.active = Some(child);
            }
            child = owner;
        }
        self.set_focused_dockable(tree, dockable);
        tracing::debug!(dockable = %tree[dockable].id, "activated dockable");
    }

    /// Move the focus path to run from the root down to `dockable`
    ///
    /// Active children are not touched. No-op for nodes not attached to the tree.
    pub fn set_focused_dockable(&self, tree: &mut DockTree, dockable: NodeId) {
        if !tree.is_attached(dockable) {
            return;
        }
        tree.clear_focus_path();
        let path: Vec<NodeId> = std::iter::once(dockable)
            .chain(tree.ancestors(dockable))
            .collect();
        for id in path {
            if let Some(node) = tree.get_mut(id) {
                node.is_focused = true;
            }
        }
    }

    pub fn clear_focus(&self, tree: &mut DockTree) {
        tree.clear_focus_path();
    }

    /// Pin a tool; other kinds cannot be pinned. Returns whether the flag is set.
    pub fn pin_dockable(&self, tree: &mut DockTree, dockable: NodeId) -> bool {
        match tree.get_mut(dockable) {
            Some(node) if node.kind == DockableKind::Tool => {
                node.is_pinned = true;
                true
            }
            _ => false,
        }
    }

    pub fn unpin_dockable(&self, tree: &mut DockTree, dockable: NodeId) {
        if let Some(node) = tree.get_mut(dockable) {
            node.is_pinned = false;
        }
    }

    /// Collapse or expand a container; collapsed subtrees are not visible
    pub fn set_collapsed(&self, tree: &mut DockTree, container: NodeId, collapsed: bool) {
        if let Some(node) = tree.get_mut(container) {
            if node.is_container() && node.kind != DockableKind::RootDock {
                node.is_collapsed = collapsed;
            }
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Lazily enumerate containers eligible for display
    ///
    /// Pre-order, left-to-right. Collapsed containers and everything beneath
    /// them are skipped. Call again to restart.
    pub fn visible_containers<'a>(&self, tree: &'a DockTree) -> VisibleContainers<'a> {
        VisibleContainers {
            tree,
            stack: vec![tree.root()],
        }
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Create a tool in the first visible tool dock with `alignment` and activate it
    ///
    /// Returns `Ok(None)` without touching the tree when no such dock exists.
    pub fn add_tool_to_dock(
        &self,
        tree: &mut DockTree,
        alignment: Alignment,
        id: &str,
        title: &str,
        content: Option<Content>,
    ) -> Result<Option<NodeId>, DockError> {
        let target = self.visible_containers(tree).find(|&c| {
            let node = &tree[c];
            node.kind == DockableKind::ToolDock && node.alignment == alignment
        });
        let Some(container) = target else {
            tracing::debug!(?alignment, "no visible tool dock for new tool");
            return Ok(None);
        };

        let tool = self.create_tool(tree, id, title);
        if let Some(content) = content {
            self.set_content(tree, tool, content);
        }
        self.add_dockable(tree, container, tool)?;
        self.set_active_dockable(tree, tool);
        Ok(Some(tool))
    }

    /// Add a tool to the first visible right-aligned tool dock
    pub fn add_tool_to_right_dock(
        &self,
        tree: &mut DockTree,
        id: &str,
        title: &str,
        content: Option<Content>,
    ) -> Result<Option<NodeId>, DockError> {
        self.add_tool_to_dock(tree, Alignment::Right, id, title, content)
    }
}

/// Lazy pre-order iterator over visible containers
#[derive(Clone)]
pub struct VisibleContainers<'a> {
    tree: &'a DockTree,
    stack: Vec<NodeId>,
}

impl Iterator for VisibleContainers<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some(id) = self.stack.pop() {
            let node = &self.tree[id];
            if !node.is_container() || node.is_collapsed() {
                continue;
            }
            self.stack.extend(node.children().iter().rev().copied());
            return Some(id);
        }
        None
    }
}
