//! Benchmarks for dock tree traversal, insertion and the layout file format
//!
//! Run with: cargo bench dock_tree

use dock_layout::dock::{Alignment, DockState, DockTree, Factory, LayoutSerializer, Orientation};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Root → ProportionalDock → `docks` tool docks (alternating left/right) of `tools` each
fn make_tree(docks: usize, tools: usize) -> DockTree {
    let factory = Factory::new();
    let mut tree = DockTree::new("Root", "Root");
    let root = tree.root();
    let main = factory.create_proportional_dock(&mut tree, "Main", "Main", Orientation::Horizontal);
    factory.add_dockable(&mut tree, root, main).unwrap();

    for d in 0..docks {
        let alignment = if d % 2 == 0 {
            Alignment::Left
        } else {
            Alignment::Right
        };
        let dock_id = format!("Dock{}", d);
        let dock = factory.create_tool_dock(&mut tree, &dock_id, &dock_id, alignment);
        factory.add_dockable(&mut tree, main, dock).unwrap();
        for t in 0..tools {
            let id = format!("Tool{}_{}", d, t);
            let tool = factory.create_tool(&mut tree, &id, &id);
            factory.add_dockable(&mut tree, dock, tool).unwrap();
        }
        if let Some(&first) = tree.children(dock).first() {
            factory.activate(&mut tree, first);
        }
    }
    tree
}

// ============================================================================
// Traversal
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn iter_preorder(bencher: divan::Bencher, docks: usize) {
    let tree = make_tree(docks, 8);
    bencher.bench_local(|| divan::black_box(&tree).iter().count());
}

#[divan::bench(args = [10, 100, 1000])]
fn visible_containers(bencher: divan::Bencher, docks: usize) {
    let factory = Factory::new();
    let tree = make_tree(docks, 8);
    bencher.bench_local(|| factory.visible_containers(divan::black_box(&tree)).count());
}

// ============================================================================
// Insertion
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn add_tool_to_right_dock(bencher: divan::Bencher, docks: usize) {
    let factory = Factory::new();
    bencher
        .with_inputs(|| make_tree(docks, 8))
        .bench_local_values(|mut tree| {
            factory
                .add_tool_to_right_dock(&mut tree, "New", "New", None)
                .unwrap();
            tree
        });
}

// ============================================================================
// Persistence
// ============================================================================

#[divan::bench(args = [10, 100])]
fn save_layout(bencher: divan::Bencher, docks: usize) {
    let serializer = LayoutSerializer::new();
    let tree = make_tree(docks, 8);
    bencher.bench_local(|| serializer.to_vec(divan::black_box(&tree)).unwrap());
}

#[divan::bench(args = [10, 100])]
fn load_layout(bencher: divan::Bencher, docks: usize) {
    let serializer = LayoutSerializer::new();
    let bytes = serializer.to_vec(&make_tree(docks, 8)).unwrap();
    bencher.bench_local(|| serializer.from_slice(divan::black_box(&bytes)).unwrap());
}

#[divan::bench(args = [10, 100])]
fn capture_and_restore_state(bencher: divan::Bencher, docks: usize) {
    let factory = Factory::new();
    let tree = make_tree(docks, 8);
    let state = DockState::save(&tree);
    bencher
        .with_inputs(|| (make_tree(docks, 8), state.clone()))
        .bench_local_values(|(mut tree, state)| {
            state.restore(&mut tree, &factory);
            tree
        });
}
