// State management module.
// Per-view navigation and tab state, resource projection, and session persistence.

#![allow(dead_code)]

pub mod navigation;
pub mod resources;
pub mod session;
pub mod tabs;

pub use navigation::{NavAction, NavRow, NavState};
pub use resources::resources_for;
pub use session::Session;
pub use tabs::TabState;
