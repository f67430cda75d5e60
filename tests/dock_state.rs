//! Transient state capture and restore tests

mod common;

use common::{nested_tree, node};
use dock_layout::dock::layouts::default_layout;
use dock_layout::dock::{DockState, DockTree, Factory, LayoutSerializer};

/// (id, active, focused, pinned) for every reachable node
fn flags(tree: &DockTree) -> Vec<(String, bool, bool, bool)> {
    tree.iter()
        .map(|n| {
            let node = &tree[n];
            (
                node.id.clone(),
                tree.is_active(n),
                node.is_focused(),
                node.is_pinned(),
            )
        })
        .collect()
}

fn selected_tree() -> DockTree {
    let factory = Factory::new();
    let mut tree = nested_tree();
    let notes = node(&tree, "Notes");
    let terminal = node(&tree, "Terminal");
    let output = node(&tree, "Output");
    factory.activate(&mut tree, terminal);
    factory.pin_dockable(&mut tree, output);
    factory.set_active_dockable(&mut tree, notes);
    tree
}

#[test]
fn test_restore_on_same_tree_is_idempotent() {
    let factory = Factory::new();
    let mut tree = selected_tree();
    let before = flags(&tree);

    let state = DockState::save(&tree);
    let matched = state.restore(&mut tree, &factory);

    assert_eq!(matched, tree.len());
    assert_eq!(flags(&tree), before);
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[test]
fn test_restore_after_reload_brings_back_selection() {
    let factory = Factory::new();
    let serializer = LayoutSerializer::new();
    let tree = selected_tree();
    let expected = flags(&tree);

    let state = DockState::save(&tree);
    let bytes = serializer.to_vec(&tree).unwrap();
    let mut loaded = serializer.from_slice(&bytes).unwrap();

    // Loading yields structure only
    assert!(flags(&loaded).iter().all(|(_, a, f, p)| !a && !f && !p));

    state.restore(&mut loaded, &factory);
    assert_eq!(flags(&loaded), expected);
    let focused = loaded.focused_dockable().unwrap();
    assert_eq!(loaded[focused].id, "Notes");
}

#[test]
fn test_restore_ignores_unknown_ids_and_keeps_unmatched_nodes() {
    let factory = Factory::new();
    let default_tree = default_layout(&factory).unwrap();
    let state = DockState::save(&default_tree);

    let mut tree = selected_tree();
    let before = flags(&tree);
    let matched = state.restore(&mut tree, &factory);

    // "Root" is the only id shared by both layouts
    assert_eq!(matched, 1);

    // Selection and pins of unmatched nodes survive
    let after = flags(&tree);
    let selection = |f: &[(String, bool, bool, bool)]| {
        f.iter()
            .map(|(id, active, _, pinned)| (id.clone(), *active, *pinned))
            .collect::<Vec<_>>()
    };
    assert_eq!(selection(&after), selection(&before));

    // Root was focused when captured, so focus now ends there
    assert_eq!(tree.focused_dockable(), Some(tree.root()));
}

#[test]
fn test_restore_with_different_focus_moves_it() {
    let factory = Factory::new();
    let mut captured = nested_tree();
    let readme = node(&captured, "Readme");
    factory.set_active_dockable(&mut captured, readme);
    let state = DockState::save(&captured);

    let mut tree = selected_tree();
    state.restore(&mut tree, &factory);

    let focused = tree.focused_dockable().unwrap();
    assert_eq!(tree[focused].id, "Readme");
    // Pin flag captured as false on Output
    assert!(!tree[node(&tree, "Output")].is_pinned());
    // Bottom dock had no selection when captured
    assert_eq!(tree.active_dockable(node(&tree, "Bottom")), None);
}

#[test]
fn test_restore_without_focus_clears_known_focus() {
    let factory = Factory::new();
    let plain = nested_tree();
    let state = DockState::save(&plain);

    let mut tree = selected_tree();
    assert!(tree.focused_dockable().is_some());
    state.restore(&mut tree, &factory);
    assert_eq!(tree.focused_dockable(), None);
}

#[test]
fn test_state_roundtrips_through_json() {
    let state = DockState::save(&selected_tree());
    let json = serde_json::to_string(&state).unwrap();
    let back: DockState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
    assert!(back.get("Output").unwrap().is_pinned);
}
