//! Dock layout manager - Elm-style layout application
//!
//! This crate provides the dock tree model (dockables, factory, transient
//! state capture and the layout file format) and an application built around
//! it using the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dock;
pub mod messages;
pub mod model;
pub mod recent_layouts;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::LayoutConfig;
pub use dock::{DockState, DockTree, Factory, LayoutSerializer};
pub use messages::Msg;
pub use model::AppModel;
