//! Dock tree arena and traversal
//!
//! The tree owns every dockable it has ever created, attached or not. Ownership
//! edges run from a container to its `children`; the child's `owner` field is a
//! plain index back-reference. Structural primitives here are crate-private:
//! outside callers mutate through [`Factory`](super::Factory).

use std::ops::Index;

use super::error::DockError;
use super::node::{Dockable, DockableKind, NodeId};

/// Deepest level a dockable may sit at, counting the root as level 0
///
/// Keeps every tree within the nesting the layout file reader accepts.
pub const MAX_DEPTH: usize = 32;

/// Hierarchy of dockables rooted at a single root dock
#[derive(Debug, Clone)]
pub struct DockTree {
    nodes: Vec<Dockable>,
    root: NodeId,
}

impl DockTree {
    /// Create a tree holding only an empty root dock
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let root = Dockable::new(DockableKind::RootDock, id, title);
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Dockable> {
        self.nodes.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Dockable> {
        self.nodes.get_mut(id.0)
    }

    /// Store a new detached node in the arena
    pub(crate) fn alloc(&mut self, node: Dockable) -> NodeId {
        debug_assert!(node.owner.is_none());
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Total nodes in the arena, attached or not
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes reachable from the root
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// A tree always holds its root
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn owner(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.owner)
    }

    /// Active child of a container
    pub fn active_dockable(&self, container: NodeId) -> Option<NodeId> {
        self.get(container).and_then(|n| n.active)
    }

    /// Whether `id` is the active child of its owner
    pub fn is_active(&self, id: NodeId) -> bool {
        self.owner(id)
            .is_some_and(|owner| self.active_dockable(owner) == Some(id))
    }

    /// Whether the owner chain of `id` reaches this tree's root
    pub fn is_attached(&self, id: NodeId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        let mut current = id;
        loop {
            if current == self.root {
                return true;
            }
            match self.owner(current) {
                Some(owner) => current = owner,
                None => return false,
            }
        }
    }

    /// Iterate owners from the immediate container up to the topmost one
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.owner(id), move |&n| self.owner(n))
    }

    /// Number of owners above `id`; the root and detached nodes are at 0
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// Levels below `id` in its subtree; a leaf or empty container has height 0
    pub fn height(&self, id: NodeId) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(id, 0)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(self.children(node).iter().map(|&c| (c, level + 1)));
        }
        deepest
    }

    /// Depth-first pre-order over every node reachable from the root
    ///
    /// Children are visited left-to-right by index, so the order is stable for
    /// structurally identical trees.
    pub fn iter(&self) -> Descendants<'_> {
        self.descendants(self.root)
    }

    /// Pre-order traversal of the subtree starting at `start`
    pub fn descendants(&self, start: NodeId) -> Descendants<'_> {
        let stack = if self.get(start).is_some() {
            vec![start]
        } else {
            Vec::new()
        };
        Descendants { tree: self, stack }
    }

    /// Containers reachable from the root for which `predicate` holds
    pub fn containers_matching<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = NodeId> + 'a
    where
        P: FnMut(&Dockable) -> bool + 'a,
    {
        self.iter().filter(move |&id| {
            let node = &self[id];
            node.is_container() && predicate(node)
        })
    }

    /// First reachable node carrying `id`
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.iter().find(|&n| self[n].id == id)
    }

    /// Deepest node on the focus path, if anything is focused
    pub fn focused_dockable(&self) -> Option<NodeId> {
        if !self[self.root].is_focused {
            return None;
        }
        let mut current = self.root;
        while let Some(next) = self
            .children(current)
            .iter()
            .copied()
            .find(|&c| self[c].is_focused)
        {
            current = next;
        }
        Some(current)
    }

    /// Attach `child` to `container` at `index` (appends when None or past the end)
    pub(crate) fn add(
        &mut self,
        container: NodeId,
        child: NodeId,
        index: Option<usize>,
    ) -> Result<(), DockError> {
        let target_ok = self
            .get(container)
            .is_some_and(|n| n.is_container())
            && self.is_attached(container);
        if !target_ok {
            return Err(DockError::InvalidTarget(container));
        }

        let Some(node) = self.get(child) else {
            return Err(DockError::InvalidChild(child));
        };
        if node.kind == DockableKind::RootDock {
            return Err(DockError::InvalidChild(child));
        }
        if let Some(owner) = node.owner {
            return Err(DockError::AlreadyOwned { child, owner });
        }
        let depth = self.depth(container) + 1 + self.height(child);
        if depth > MAX_DEPTH {
            return Err(DockError::TooDeep { container, depth });
        }

        self.nodes[child.0].owner = Some(container);
        let children = &mut self.nodes[container.0].children;
        let at = index.unwrap_or(children.len()).min(children.len());
        children.insert(at, child);
        Ok(())
    }

    /// Detach `child` from `container`, returning the index it occupied
    ///
    /// Clears the container's active child if it was `child`, and drops the
    /// focus path if it ran through the removed subtree.
    pub(crate) fn remove(&mut self, container: NodeId, child: NodeId) -> Result<usize, DockError> {
        if !self.get(container).is_some_and(|n| n.is_container()) {
            return Err(DockError::InvalidTarget(container));
        }
        if self.owner(child) != Some(container) {
            return Err(DockError::InvalidChild(child));
        }

        let parent = &mut self.nodes[container.0];
        let Some(index) = parent.children.iter().position(|&c| c == child) else {
            return Err(DockError::InvalidChild(child));
        };
        parent.children.remove(index);
        if parent.active == Some(child) {
            parent.active = None;
        }

        let focus_inside = self[child].is_focused;
        self.nodes[child.0].owner = None;
        if focus_inside {
            self.clear_focus_path();
        }
        Ok(index)
    }

    /// Clear the focus flag on every node in the arena
    pub(crate) fn clear_focus_path(&mut self) {
        for node in &mut self.nodes {
            node.is_focused = false;
        }
    }

    /// Verify ownership and selection invariants for the reachable tree
    ///
    /// Every child points back at its container, no node is reachable twice,
    /// and every active child is one of its container's children.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self[self.root].owner.is_some() {
            return Err("root dock has an owner".to_string());
        }
        let mut seen = vec![false; self.nodes.len()];
        let mut pending = vec![self.root];
        while let Some(id) = pending.pop() {
            if std::mem::replace(&mut seen[id.0], true) {
                return Err(format!("#{} reachable more than once", id.0));
            }
            let node = &self[id];
            if let Some(active) = node.active {
                if !node.children.contains(&active) {
                    return Err(format!(
                        "active #{} of \"{}\" is not one of its children",
                        active.0, node.id
                    ));
                }
            }
            for &child in &node.children {
                if self[child].owner != Some(id) {
                    return Err(format!(
                        "\"{}\" is listed under \"{}\" but owned by {:?}",
                        self[child].id, node.id, self[child].owner
                    ));
                }
                pending.push(child);
            }
        }
        Ok(())
    }

    /// Compare shape, kinds, ids, titles and placement against another tree
    ///
    /// Transient flags and view content are ignored.
    pub fn structurally_eq(&self, other: &DockTree) -> bool {
        let mut pending = vec![(self.root, other.root)];
        while let Some((a, b)) = pending.pop() {
            let (left, right) = (&self[a], &other[b]);
            let same = left.kind == right.kind
                && left.id == right.id
                && left.title == right.title
                && left.alignment == right.alignment
                && left.orientation == right.orientation
                && left.is_collapsed == right.is_collapsed
                && left.children.len() == right.children.len();
            if !same {
                return false;
            }
            pending.extend(left.children.iter().copied().zip(right.children.iter().copied()));
        }
        true
    }
}

impl Index<NodeId> for DockTree {
    type Output = Dockable;

    fn index(&self, id: NodeId) -> &Dockable {
        &self.nodes[id.0]
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    tree: &'a DockTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dock::Alignment;

    fn leaf(tree: &mut DockTree, id: &str) -> NodeId {
        tree.alloc(Dockable::new(DockableKind::Tool, id, id))
    }

    fn dock(tree: &mut DockTree, id: &str, alignment: Alignment) -> NodeId {
        let mut node = Dockable::new(DockableKind::ToolDock, id, id);
        node.alignment = alignment;
        tree.alloc(node)
    }

    #[test]
    fn test_preorder_left_to_right() {
        let mut tree = DockTree::new("root", "Root");
        let left = dock(&mut tree, "left", Alignment::Left);
        let right = dock(&mut tree, "right", Alignment::Right);
        let a = leaf(&mut tree, "a");
        let b = leaf(&mut tree, "b");
        let root = tree.root();

        tree.add(root, left, None).unwrap();
        tree.add(root, right, None).unwrap();
        tree.add(left, a, None).unwrap();
        tree.add(right, b, None).unwrap();

        let ids: Vec<&str> = tree.iter().map(|n| tree[n].id.as_str()).collect();
        assert_eq!(ids, vec!["root", "left", "a", "right", "b"]);
    }

    #[test]
    fn test_add_rejects_owned_child() {
        let mut tree = DockTree::new("root", "Root");
        let left = dock(&mut tree, "left", Alignment::Left);
        let right = dock(&mut tree, "right", Alignment::Right);
        let a = leaf(&mut tree, "a");
        let root = tree.root();
        tree.add(root, left, None).unwrap();
        tree.add(root, right, None).unwrap();
        tree.add(left, a, None).unwrap();

        assert_eq!(
            tree.add(right, a, None),
            Err(DockError::AlreadyOwned {
                child: a,
                owner: left
            })
        );
        assert_eq!(tree.children(right), &[] as &[NodeId]);
    }

    #[test]
    fn test_add_rejects_detached_or_leaf_target() {
        let mut tree = DockTree::new("root", "Root");
        let detached = dock(&mut tree, "floating", Alignment::Unset);
        let a = leaf(&mut tree, "a");
        let b = leaf(&mut tree, "b");

        assert_eq!(tree.add(detached, a, None), Err(DockError::InvalidTarget(detached)));

        let root = tree.root();
        tree.add(root, a, None).unwrap();
        assert_eq!(tree.add(a, b, None), Err(DockError::InvalidTarget(a)));
        assert_eq!(tree.add(root, root, None), Err(DockError::InvalidChild(root)));
    }

    #[test]
    fn test_add_at_index_clamps() {
        let mut tree = DockTree::new("root", "Root");
        let root = tree.root();
        let a = leaf(&mut tree, "a");
        let b = leaf(&mut tree, "b");
        let c = leaf(&mut tree, "c");
        tree.add(root, a, None).unwrap();
        tree.add(root, b, Some(0)).unwrap();
        tree.add(root, c, Some(99)).unwrap();
        assert_eq!(tree.children(root), &[b, a, c]);
    }

    #[test]
    fn test_add_rejects_nesting_past_max_depth() {
        let mut tree = DockTree::new("root", "Root");
        let mut container = tree.root();
        for level in 1..MAX_DEPTH {
            let next = dock(&mut tree, &format!("d{}", level), Alignment::Unset);
            tree.add(container, next, None).unwrap();
            container = next;
        }
        assert_eq!(tree.depth(container), MAX_DEPTH - 1);
        assert_eq!(tree.height(tree.root()), MAX_DEPTH - 1);

        let last = leaf(&mut tree, "last");
        tree.add(container, last, None).unwrap();
        let extra = leaf(&mut tree, "extra");
        assert_eq!(
            tree.add(last, extra, None),
            Err(DockError::InvalidTarget(last))
        );

        // A detached subtree counts its own height
        let top = dock(&mut tree, "top", Alignment::Unset);
        let below = leaf(&mut tree, "below");
        tree.nodes[below.0].owner = Some(top);
        tree.nodes[top.0].children.push(below);
        assert_eq!(
            tree.add(container, top, None),
            Err(DockError::TooDeep {
                container,
                depth: MAX_DEPTH + 1
            })
        );
        assert_eq!(tree.owner(top), None);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_remove_clears_active_and_owner() {
        let mut tree = DockTree::new("root", "Root");
        let root = tree.root();
        let a = leaf(&mut tree, "a");
        tree.add(root, a, None).unwrap();
        tree.get_mut(root).unwrap().active = Some(a);

        assert_eq!(tree.remove(root, a), Ok(0));
        assert_eq!(tree.active_dockable(root), None);
        assert_eq!(tree.owner(a), None);
        assert!(!tree.is_attached(a));
        assert_eq!(tree.remove(root, a), Err(DockError::InvalidChild(a)));
    }

    #[test]
    fn test_is_attached_follows_owner_chain() {
        let mut tree = DockTree::new("root", "Root");
        let floating = dock(&mut tree, "floating", Alignment::Unset);
        let a = leaf(&mut tree, "a");
        // Build a detached subtree directly; add() refuses detached targets
        tree.nodes[a.0].owner = Some(floating);
        tree.nodes[floating.0].children.push(a);

        assert!(tree.is_attached(tree.root()));
        assert!(!tree.is_attached(a));
        tree.add(tree.root(), floating, None).unwrap();
        assert!(tree.is_attached(a));
        assert_eq!(tree.ancestors(a).collect::<Vec<_>>(), vec![floating, tree.root()]);
    }

    #[test]
    fn test_structural_equality_ignores_transient_flags() {
        let build = || {
            let mut tree = DockTree::new("root", "Root");
            let right = dock(&mut tree, "right", Alignment::Right);
            let a = leaf(&mut tree, "a");
            let root = tree.root();
            tree.add(root, right, None).unwrap();
            tree.add(right, a, None).unwrap();
            (tree, right, a)
        };
        let (first, _, _) = build();
        let (mut second, right, a) = build();
        second.get_mut(right).unwrap().active = Some(a);
        second.get_mut(a).unwrap().is_pinned = true;
        assert!(first.structurally_eq(&second));

        second.get_mut(a).unwrap().title = "renamed".to_string();
        assert!(!first.structurally_eq(&second));
    }
}
