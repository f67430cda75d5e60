//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod layout;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::SelectionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use layout::update_layout;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Layout(m) => layout::update_layout(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after selection state, logs diffs and checks tree
/// invariants after every message.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = model.layout.as_ref().map(SelectionSnapshot::from_tree);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    if let (Some(before), Some(tree)) = (&before, model.layout.as_ref()) {
        if let Some(diff) = before.diff(&SelectionSnapshot::from_tree(tree)) {
            debug!(target: "selection", %diff, "state changed");
        }
    }

    if let Some(tree) = &model.layout {
        if let Err(violation) = tree.check_invariants() {
            tracing::error!(msg = %msg_name, %violation, "dock tree invariant violated");
            debug_assert!(false, "dock tree invariant violated after {}: {}", msg_name, violation);
        }
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Layout::NewTool`
/// - `Layout::LayoutRead(/tmp/layout.json, 812 bytes)`
/// - `App::Quit`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::LayoutMsg;

    match msg {
        // File contents would swamp the log
        Msg::Layout(LayoutMsg::LayoutRead { path, result }) => format!(
            "Layout::LayoutRead({}, {})",
            path.display(),
            match result {
                Ok(bytes) => format!("{} bytes", bytes.len()),
                Err(e) => format!("error: {}", e),
            }
        ),
        Msg::Layout(m) => format!("Layout::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
