//! Runtime - executes commands and drives the menu
//!
//! - `app` - runs the update loop and performs side effects on worker threads
//! - `menu` - line-oriented menu reading actions from a text stream
//! - `picker` - native and headless file pickers

pub mod app;
pub mod menu;
pub mod picker;

pub use app::App;
pub use picker::{FileFilter, FilePicker, NativePicker, NoDialogs, LAYOUT_FILTERS};
