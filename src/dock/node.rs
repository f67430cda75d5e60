//! Dockable nodes
//!
//! A dockable is either a leaf (tool, document) or a container that owns an
//! ordered list of children. Nodes live in the arena owned by [`DockTree`] and
//! refer to each other through [`NodeId`] handles.
//!
//! [`DockTree`]: super::DockTree

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Handle to a node in a [`DockTree`](super::DockTree) arena
///
/// Only meaningful for the tree that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena index
    pub fn index(self) -> usize {
        self.0
    }
}

/// Placement hint for a container, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Unset,
    Left,
    Right,
    Top,
    Bottom,
}

/// Axis along which a proportional dock arranges its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Node variant discriminator
///
/// Closed set: serialization and predicate matching are exhaustive over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DockableKind {
    Tool,
    Document,
    ToolDock,
    DocumentDock,
    ProportionalDock,
    RootDock,
}

impl DockableKind {
    pub const ALL: [DockableKind; 6] = [
        DockableKind::Tool,
        DockableKind::Document,
        DockableKind::ToolDock,
        DockableKind::DocumentDock,
        DockableKind::ProportionalDock,
        DockableKind::RootDock,
    ];

    /// Whether nodes of this kind own children
    pub fn is_container(self) -> bool {
        !self.is_leaf()
    }

    pub fn is_leaf(self) -> bool {
        matches!(self, DockableKind::Tool | DockableKind::Document)
    }

    /// Discriminator written to and read from layout files
    pub fn type_name(self) -> &'static str {
        match self {
            DockableKind::Tool => "Tool",
            DockableKind::Document => "Document",
            DockableKind::ToolDock => "ToolDock",
            DockableKind::DocumentDock => "DocumentDock",
            DockableKind::ProportionalDock => "ProportionalDock",
            DockableKind::RootDock => "RootDock",
        }
    }

    /// Parse a discriminator, returning None for unknown names
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }
}

impl fmt::Display for DockableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Opaque view produced by a [`Content`] builder
///
/// The model layer never looks inside; the display layer downcasts to whatever
/// it built.
pub struct ViewHandle(Box<dyn Any>);

impl ViewHandle {
    pub fn new<T: Any>(view: T) -> Self {
        Self(Box::new(view))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ViewHandle(..)")
    }
}

/// Deferred view factory attached to a dockable
///
/// Holds a builder closure that is only invoked by the display layer when the
/// node is actually shown. Cloning shares the closure.
#[derive(Clone)]
pub struct Content(Rc<dyn Fn(&Dockable) -> ViewHandle>);

impl Content {
    pub fn new(build: impl Fn(&Dockable) -> ViewHandle + 'static) -> Self {
        Self(Rc::new(build))
    }

    /// Build the view for `node`
    pub fn build(&self, node: &Dockable) -> ViewHandle {
        (self.0)(node)
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Content(..)")
    }
}

/// A node in the dock tree
#[derive(Debug, Clone)]
pub struct Dockable {
    /// Stable identity, used as the join key for dock state
    pub id: String,

    /// Display label
    pub title: String,

    /// Variant discriminator
    pub kind: DockableKind,

    /// Deferred view factory (never serialized)
    pub content: Option<Content>,

    pub(crate) owner: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) active: Option<NodeId>,
    pub(crate) alignment: Alignment,
    pub(crate) orientation: Orientation,
    pub(crate) is_collapsed: bool,
    pub(crate) is_focused: bool,
    pub(crate) is_pinned: bool,
}

impl Dockable {
    pub(crate) fn new(kind: DockableKind, id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            content: None,
            owner: None,
            children: Vec::new(),
            active: None,
            alignment: Alignment::Unset,
            orientation: Orientation::Horizontal,
            is_collapsed: false,
            is_focused: false,
            is_pinned: false,
        }
    }

    /// Owning container, if attached
    pub fn owner(&self) -> Option<NodeId> {
        self.owner
    }

    /// Children in tab/pane order (empty for leaves)
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Currently selected child of this container
    pub fn active_dockable(&self) -> Option<NodeId> {
        self.active
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    /// Collapsed containers hide themselves and their subtree
    pub fn is_collapsed(&self) -> bool {
        self.is_collapsed
    }

    /// Whether this node lies on the focus path
    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn is_pinned(&self) -> bool {
        self.is_pinned
    }
}
