//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dock_layout::config::LayoutConfig;
use dock_layout::dock::{Alignment, DockTree, Factory, NodeId, Orientation};
use dock_layout::model::AppModel;

/// Root → [Right ToolDock [ToolA], Left ToolDock [ToolB]]
pub struct TwoDocks {
    pub tree: DockTree,
    pub right: NodeId,
    pub left: NodeId,
    pub tool_a: NodeId,
    pub tool_b: NodeId,
}

pub fn two_docks() -> TwoDocks {
    let factory = Factory::new();
    let mut tree = DockTree::new("Root", "Root");
    let root = tree.root();
    let right = factory.create_tool_dock(&mut tree, "RightDock", "Right", Alignment::Right);
    let left = factory.create_tool_dock(&mut tree, "LeftDock", "Left", Alignment::Left);
    factory.add_dockable(&mut tree, root, right).unwrap();
    factory.add_dockable(&mut tree, root, left).unwrap();

    let tool_a = factory.create_tool(&mut tree, "ToolA", "Tool A");
    let tool_b = factory.create_tool(&mut tree, "ToolB", "Tool B");
    factory.add_dockable(&mut tree, right, tool_a).unwrap();
    factory.add_dockable(&mut tree, left, tool_b).unwrap();

    TwoDocks {
        tree,
        right,
        left,
        tool_a,
        tool_b,
    }
}

/// A deeper tree exercising every container kind, with a collapsed dock
///
/// ```text
/// Root
/// └─ Main (vertical)
///    ├─ Top (horizontal)
///    │  ├─ Explorer (left, collapsed): Files
///    │  └─ Editors: Readme, Notes
///    └─ Bottom (bottom): Output, Terminal
/// ```
pub fn nested_tree() -> DockTree {
    let factory = Factory::new();
    let mut tree = DockTree::new("Root", "Root");
    let root = tree.root();

    let main = factory.create_proportional_dock(&mut tree, "Main", "Main", Orientation::Vertical);
    let top = factory.create_proportional_dock(&mut tree, "Top", "Top", Orientation::Horizontal);
    let explorer = factory.create_tool_dock(&mut tree, "Explorer", "Explorer", Alignment::Left);
    let editors = factory.create_document_dock(&mut tree, "Editors", "Editors");
    let bottom = factory.create_tool_dock(&mut tree, "Bottom", "Bottom", Alignment::Bottom);

    factory.add_dockable(&mut tree, root, main).unwrap();
    factory.add_dockable(&mut tree, main, top).unwrap();
    factory.add_dockable(&mut tree, main, bottom).unwrap();
    factory.add_dockable(&mut tree, top, explorer).unwrap();
    factory.add_dockable(&mut tree, top, editors).unwrap();

    let files = factory.create_tool(&mut tree, "Files", "Files");
    factory.add_dockable(&mut tree, explorer, files).unwrap();
    for (id, title) in [("Readme", "README.md"), ("Notes", "notes.txt")] {
        let doc = factory.create_document(&mut tree, id, title);
        factory.add_dockable(&mut tree, editors, doc).unwrap();
    }
    for (id, title) in [("Output", "Output"), ("Terminal", "Terminal")] {
        let tool = factory.create_tool(&mut tree, id, title);
        factory.add_dockable(&mut tree, bottom, tool).unwrap();
    }
    factory.set_collapsed(&mut tree, explorer, true);
    tree
}

/// Look up a node by id, panicking with a readable message if it is missing
pub fn node(tree: &DockTree, id: &str) -> NodeId {
    tree.find_by_id(id)
        .unwrap_or_else(|| panic!("no dockable with id {:?}", id))
}

/// Ids of every reachable node in pre-order
pub fn ids(tree: &DockTree) -> Vec<String> {
    tree.iter().map(|n| tree[n].id.clone()).collect()
}

/// Model with the default layout and no persistent recent store
pub fn test_model() -> AppModel {
    AppModel::new(LayoutConfig::default())
}
