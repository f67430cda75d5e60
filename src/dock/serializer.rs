//! Layout file serializer
//!
//! Writes the structural part of a dock tree as JSON and reads it back. Each
//! node is an object tagged with a `$type` discriminator:
//!
//! ```json
//! {
//!   "$type": "RootDock",
//!   "Id": "Root",
//!   "Title": "Root",
//!   "VisibleDockables": [
//!     { "$type": "ToolDock", "Id": "RightDock", "Title": "Right", "Alignment": "Right",
//!       "VisibleDockables": [ { "$type": "Tool", "Id": "Tool3", "Title": "Tool3" } ] }
//!   ]
//! }
//! ```
//!
//! Active, focused and pinned flags are never written, and neither is view
//! content. See [`DockState`](super::DockState) for the transient half.
//!
//! Trees are at most [`MAX_DEPTH`] levels deep, which keeps files well inside
//! the JSON reader's nesting limit. Loading a file that nests deeper than that
//! fails like any other file that does not describe a valid tree.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::node::{Alignment, Dockable, DockableKind, NodeId, Orientation};
use super::tree::{DockTree, MAX_DEPTH};

const TYPE_KEY: &str = "$type";
const CHILDREN_KEY: &str = "VisibleDockables";

/// Errors that can occur when reading or writing a layout file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializeError {
    /// The bytes are not well-formed JSON
    MalformedInput(String),
    /// Well-formed JSON that does not describe a dock tree
    SchemaMismatch(String),
    /// The tree nests deeper than `MAX_DEPTH` and cannot be written
    TooDeep(usize),
    /// Underlying stream failure
    Io(String),
}

impl SerializeError {
    /// Get a user-friendly error message
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::MalformedInput(_) => format!("{} is not a valid layout file", filename),
            Self::SchemaMismatch(msg) => format!("Unsupported layout in {}: {}", filename, msg),
            Self::TooDeep(depth) => format!(
                "Cannot save {}: layout nests {} levels deep (max {})",
                filename, depth, MAX_DEPTH
            ),
            Self::Io(msg) => format!("Error reading {}: {}", filename, msg),
        }
    }
}

impl std::fmt::Display for SerializeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedInput(e) => write!(f, "malformed input: {}", e),
            Self::SchemaMismatch(e) => write!(f, "schema mismatch: {}", e),
            Self::TooDeep(depth) => write!(f, "tree is {} levels deep (max {})", depth, MAX_DEPTH),
            Self::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for SerializeError {}

impl From<std::io::Error> for SerializeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

fn is_unset(alignment: &Alignment) -> bool {
    *alignment == Alignment::Unset
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// On-disk shape of a single dockable
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PersistedDockable {
    #[serde(rename = "$type")]
    kind: DockableKind,
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default, skip_serializing_if = "is_unset")]
    alignment: Alignment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    orientation: Option<Orientation>,
    #[serde(default, skip_serializing_if = "is_false")]
    is_collapsed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    visible_dockables: Option<Vec<PersistedDockable>>,
}

impl PersistedDockable {
    fn capture(tree: &DockTree, id: NodeId) -> Self {
        let node = &tree[id];
        let visible_dockables = node.is_container().then(|| {
            node.children()
                .iter()
                .map(|&child| Self::capture(tree, child))
                .collect()
        });
        Self {
            kind: node.kind,
            id: node.id.clone(),
            title: node.title.clone(),
            alignment: node.alignment(),
            orientation: (node.kind == DockableKind::ProportionalDock).then(|| node.orientation()),
            is_collapsed: node.is_collapsed(),
            visible_dockables,
        }
    }

    fn into_dockable(self) -> (Dockable, Vec<PersistedDockable>) {
        let mut node = Dockable::new(self.kind, self.id, self.title);
        node.alignment = self.alignment;
        node.orientation = self.orientation.unwrap_or_default();
        node.is_collapsed = self.is_collapsed;
        (node, self.visible_dockables.unwrap_or_default())
    }
}

/// Structural JSON serializer for dock trees
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutSerializer {
    pretty: bool,
}

impl LayoutSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent the written JSON
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Write the structure of `tree` to `writer`
    pub fn save<W: Write>(&self, mut writer: W, tree: &DockTree) -> Result<(), SerializeError> {
        let depth = tree.height(tree.root());
        if depth > MAX_DEPTH {
            return Err(SerializeError::TooDeep(depth));
        }
        let persisted = PersistedDockable::capture(tree, tree.root());
        let result = if self.pretty {
            serde_json::to_writer_pretty(&mut writer, &persisted)
        } else {
            serde_json::to_writer(&mut writer, &persisted)
        };
        result.map_err(|e| SerializeError::Io(e.to_string()))?;
        writer.flush()?;
        Ok(())
    }

    pub fn to_vec(&self, tree: &DockTree) -> Result<Vec<u8>, SerializeError> {
        let mut bytes = Vec::new();
        self.save(&mut bytes, tree)?;
        Ok(bytes)
    }

    /// Read a tree back from `reader`
    ///
    /// The returned tree has no active, focused or pinned state.
    pub fn load<R: Read>(&self, reader: R) -> Result<DockTree, SerializeError> {
        let value: Value = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                SerializeError::Io(e.to_string())
            } else {
                SerializeError::MalformedInput(e.to_string())
            }
        })?;

        check_discriminators(&value, "root")?;
        let persisted: PersistedDockable = serde_json::from_value(value)
            .map_err(|e| SerializeError::SchemaMismatch(e.to_string()))?;
        build_tree(persisted)
    }

    pub fn from_slice(&self, bytes: &[u8]) -> Result<DockTree, SerializeError> {
        self.load(bytes)
    }
}

/// Every node must be an object carrying a known `$type`
fn check_discriminators(value: &Value, path: &str) -> Result<(), SerializeError> {
    let Some(object) = value.as_object() else {
        return Err(SerializeError::SchemaMismatch(format!(
            "{} is not an object",
            path
        )));
    };
    let Some(type_value) = object.get(TYPE_KEY) else {
        return Err(SerializeError::SchemaMismatch(format!(
            "{} is missing \"{}\"",
            path, TYPE_KEY
        )));
    };
    let Some(type_name) = type_value.as_str() else {
        return Err(SerializeError::SchemaMismatch(format!(
            "{}.{} is not a string",
            path, TYPE_KEY
        )));
    };
    if DockableKind::from_type_name(type_name).is_none() {
        return Err(SerializeError::SchemaMismatch(format!(
            "{} has unknown type \"{}\"",
            path, type_name
        )));
    }

    if let Some(children) = object.get(CHILDREN_KEY).and_then(Value::as_array) {
        for (i, child) in children.iter().enumerate() {
            check_discriminators(child, &format!("{}.{}[{}]", path, CHILDREN_KEY, i))?;
        }
    }
    Ok(())
}

fn build_tree(root: PersistedDockable) -> Result<DockTree, SerializeError> {
    if root.kind != DockableKind::RootDock {
        return Err(SerializeError::SchemaMismatch(format!(
            "top-level node is {}, expected RootDock",
            root.kind
        )));
    }

    let (root_node, children) = root.into_dockable();
    let mut tree = DockTree::new(root_node.id.clone(), root_node.title.clone());
    let root_id = tree.root();
    if let Some(node) = tree.get_mut(root_id) {
        node.alignment = root_node.alignment;
    }

    let mut pending: Vec<(NodeId, Vec<PersistedDockable>)> = vec![(root_id, children)];
    while let Some((container, children)) = pending.pop() {
        for child in children {
            if child.kind == DockableKind::RootDock {
                return Err(SerializeError::SchemaMismatch(format!(
                    "nested RootDock \"{}\"",
                    child.id
                )));
            }
            if child.kind.is_leaf() && child.visible_dockables.is_some() {
                return Err(SerializeError::SchemaMismatch(format!(
                    "{} \"{}\" cannot have children",
                    child.kind, child.id
                )));
            }

            let (node, grandchildren) = child.into_dockable();
            let id = tree.alloc(node);
            tree.add(container, id, None)
                .map_err(|e| SerializeError::SchemaMismatch(e.to_string()))?;
            if !grandchildren.is_empty() {
                pending.push((id, grandchildren));
            }
        }
    }
    Ok(tree)
}
