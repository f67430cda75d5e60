//! Dock system - hierarchical docking layout model
//!
//! A layout is a tree of dockables rooted at a root dock. Leaves are tools and
//! documents; containers are tool docks, document docks and proportional docks.
//!
//! ## Architecture
//!
//! - `DockTree`: arena owning every node, with pre-order traversal and queries
//! - `Factory`: the only public way to change structure, selection and focus
//! - `DockState`: active/focused/pinned flags captured by id and re-applied later
//! - `LayoutSerializer`: structural JSON encoding of a tree
//!
//! ## Integration
//!
//! The application layer drives this module from `update::update_layout` in
//! response to `LayoutMsg` messages.

mod error;
mod factory;
pub mod layouts;
mod node;
mod serializer;
mod state;
mod tree;

pub use error::DockError;
pub use factory::{Factory, VisibleContainers};
pub use node::{Alignment, Content, Dockable, DockableKind, NodeId, Orientation, ViewHandle};
pub use serializer::{LayoutSerializer, SerializeError};
pub use state::{DockState, DockableState};
pub use tree::{Descendants, DockTree, MAX_DEPTH};
