//! Built-in layouts
//!
//! The default layout is what the application shows before any layout file
//! has been opened.

use super::error::DockError;
use super::factory::Factory;
use super::node::{Alignment, NodeId, Orientation};
use super::tree::DockTree;

/// Left tools, documents in the middle, right tools
///
/// ```text
/// RootDock "Root"
/// └─ ProportionalDock "MainLayout" (horizontal)
///    ├─ ToolDock "LeftPane" (left): Tool1, Tool2
///    ├─ DocumentDock "DocumentsPane": Document1, Document2
///    └─ ToolDock "RightPane" (right): Tool3, Tool4
/// ```
pub fn default_layout(factory: &Factory) -> Result<DockTree, DockError> {
    let mut tree = DockTree::new("Root", "Root");
    let root = tree.root();

    let main = factory.create_proportional_dock(
        &mut tree,
        "MainLayout",
        "MainLayout",
        Orientation::Horizontal,
    );
    factory.add_dockable(&mut tree, root, main)?;

    let left = factory.create_tool_dock(&mut tree, "LeftPane", "LeftPane", Alignment::Left);
    let documents = factory.create_document_dock(&mut tree, "DocumentsPane", "DocumentsPane");
    let right = factory.create_tool_dock(&mut tree, "RightPane", "RightPane", Alignment::Right);
    for container in [left, documents, right] {
        factory.add_dockable(&mut tree, main, container)?;
    }

    let tools = add_tools(
        factory,
        &mut tree,
        left,
        &[("Tool1", "Tool 1"), ("Tool2", "Tool 2")],
    )?;
    add_tools(
        factory,
        &mut tree,
        right,
        &[("Tool3", "Tool 3"), ("Tool4", "Tool 4")],
    )?;
    for (id, title) in [("Document1", "Document 1"), ("Document2", "Document 2")] {
        let doc = factory.create_document(&mut tree, id, title);
        factory.add_dockable(&mut tree, documents, doc)?;
    }

    if let Some(&first) = tools.first() {
        factory.activate(&mut tree, first);
    }
    let right_first = tree.children(right).first().copied();
    if let Some(tool) = right_first {
        factory.activate(&mut tree, tool);
    }
    let first_doc = tree.children(documents).first().copied();
    if let Some(doc) = first_doc {
        factory.set_active_dockable(&mut tree, doc);
    }

    Ok(tree)
}

fn add_tools(
    factory: &Factory,
    tree: &mut DockTree,
    dock: NodeId,
    tools: &[(&str, &str)],
) -> Result<Vec<NodeId>, DockError> {
    let mut ids = Vec::with_capacity(tools.len());
    for (id, title) in tools {
        let tool = factory.create_tool(tree, id, title);
        factory.add_dockable(tree, dock, tool)?;
        ids.push(tool);
    }
    Ok(ids)
}
