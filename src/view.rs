//! Display layer
//!
//! Renders the installed layout as an indented outline. This is the only place
//! that evaluates dockable content: views are built for the active leaf of each
//! visible container, when the outline is drawn.

use std::fmt::Write;

use crate::dock::{Alignment, Content, DockTree, DockableKind, NodeId, Orientation, ViewHandle};
use crate::model::AppModel;

/// View shown for tools created from the "New tool" command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolView {
    pub id: String,
    pub title: String,
}

impl ToolView {
    pub fn describe(&self) -> String {
        format!("MenuToolView({})", self.title)
    }
}

/// Content builder for menu-created tools
pub fn tool_content() -> Content {
    Content::new(|node| {
        ViewHandle::new(ToolView {
            id: node.id.clone(),
            title: node.title.clone(),
        })
    })
}

/// Render the whole application: layout outline followed by the status line
pub fn render(model: &AppModel) -> String {
    let mut out = match &model.layout {
        Some(tree) => render_layout(tree),
        None => "(no layout)\n".to_string(),
    };
    if let Some(status) = model.current_status() {
        let marker = if status.is_error() { "error: " } else { "" };
        let _ = writeln!(out, "-- {}{}", marker, status.text);
    }
    out
}

/// Render a tree as an indented outline
///
/// Collapsed containers are shown without their children.
pub fn render_layout(tree: &DockTree) -> String {
    let mut out = String::new();
    render_node(tree, tree.root(), 0, &mut out);
    out
}

fn render_node(tree: &DockTree, id: NodeId, depth: usize, out: &mut String) {
    let node = &tree[id];
    let indent = "  ".repeat(depth);
    let _ = write!(out, "{}{} \"{}\"", indent, node.kind, node.title);

    let mut tags = Vec::new();
    match node.alignment() {
        Alignment::Unset => {}
        alignment => tags.push(format!("{:?}", alignment).to_lowercase()),
    }
    if node.kind == DockableKind::ProportionalDock {
        tags.push(
            match node.orientation() {
                Orientation::Horizontal => "horizontal",
                Orientation::Vertical => "vertical",
            }
            .to_string(),
        );
    }
    if tree.is_active(id) {
        tags.push("active".to_string());
    }
    if node.is_focused() {
        tags.push("focused".to_string());
    }
    if node.is_pinned() {
        tags.push("pinned".to_string());
    }
    if node.is_collapsed() {
        tags.push("collapsed".to_string());
    }
    if !tags.is_empty() {
        let _ = write!(out, " [{}]", tags.join(", "));
    }
    out.push('\n');

    if node.is_leaf() && tree.is_active(id) {
        if let Some(view) = node.content.as_ref().map(|c| c.build(node)) {
            let _ = writeln!(out, "{}  view: {}", indent, describe_view(&view));
        }
    }

    if node.is_collapsed() {
        return;
    }
    for &child in node.children() {
        render_node(tree, child, depth + 1, out);
    }
}

fn describe_view(view: &ViewHandle) -> String {
    view.downcast_ref::<ToolView>()
        .map(ToolView::describe)
        .or_else(|| view.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "<view>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dock::Factory;

    #[test]
    fn test_render_marks_selection_and_builds_active_view() {
        let factory = Factory::new();
        let mut tree = DockTree::new("root", "Root");
        let root = tree.root();
        let right = factory.create_tool_dock(&mut tree, "right", "Right", Alignment::Right);
        factory.add_dockable(&mut tree, root, right).unwrap();
        let tool = factory
            .add_tool_to_right_dock(&mut tree, "menu", "MenuTool", Some(tool_content()))
            .unwrap()
            .unwrap();
        assert_eq!(tree[tool].id, "menu");

        let text = render_layout(&tree);
        assert_eq!(
            text,
            "RootDock \"Root\" [focused]\n\
             \x20 ToolDock \"Right\" [right, active, focused]\n\
             \x20   Tool \"MenuTool\" [active, focused]\n\
             \x20     view: MenuToolView(MenuTool)\n"
        );
    }

    #[test]
    fn test_render_status_line_marks_errors() {
        let mut model = AppModel::empty(crate::config::LayoutConfig::default());
        model.set_status("Layout closed");
        assert_eq!(render(&model), "(no layout)\n-- Layout closed\n");

        model.set_error("Error reading x.json: gone");
        assert_eq!(render(&model), "(no layout)\n-- error: Error reading x.json: gone\n");
    }

    #[test]
    fn test_render_hides_collapsed_children() {
        let factory = Factory::new();
        let mut tree = DockTree::new("root", "Root");
        let root = tree.root();
        let left = factory.create_tool_dock(&mut tree, "left", "Left", Alignment::Left);
        factory.add_dockable(&mut tree, root, left).unwrap();
        let tool = factory.create_tool(&mut tree, "t", "Hidden");
        factory.add_dockable(&mut tree, left, tool).unwrap();
        factory.set_collapsed(&mut tree, left, true);

        let text = render_layout(&tree);
        assert!(text.contains("[left, collapsed]"));
        assert!(!text.contains("Hidden"));
    }
}
