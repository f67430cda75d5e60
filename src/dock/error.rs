//! Structural errors raised by tree mutation

use super::node::NodeId;

/// Structural invariant violations
///
/// These indicate a programming error in the caller and are returned rather
/// than swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockError {
    /// The child already has an owner; a dockable may only live in one container
    AlreadyOwned { child: NodeId, owner: NodeId },
    /// The target is missing, not a container, or not attached to the tree
    InvalidTarget(NodeId),
    /// The node cannot be placed inside a container (a root dock)
    InvalidChild(NodeId),
    /// Attaching would put a node deeper than `MAX_DEPTH`
    TooDeep { container: NodeId, depth: usize },
}

impl std::fmt::Display for DockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyOwned { child, owner } => write!(
                f,
                "dockable #{} is already owned by #{}",
                child.index(),
                owner.index()
            ),
            Self::InvalidTarget(id) => {
                write!(f, "#{} is not an attached container", id.index())
            }
            Self::InvalidChild(id) => {
                write!(f, "#{} cannot be added to a container", id.index())
            }
            Self::TooDeep { container, depth } => write!(
                f,
                "adding under #{} would nest {} levels deep (max {})",
                container.index(),
                depth,
                super::tree::MAX_DEPTH
            ),
        }
    }
}

impl std::error::Error for DockError {}
