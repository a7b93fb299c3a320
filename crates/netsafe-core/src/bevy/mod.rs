//! Bevy-based scene engine for NetSafe Explorer.
//!
//! This module provides the ECS components, resources and systems that
//! drive the 3D scene, plus the shared stores the Yew frontend polls.

pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod state_store;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_utils;

#[cfg(all(target_arch = "wasm32", feature = "windowed"))]
pub mod wasm_entry;

#[cfg(all(target_arch = "wasm32", feature = "windowed"))]
pub use wasm_entry::*;

pub use components::*;
pub use events::*;
pub use plugin::{ExplorerHeadlessPlugin, ExplorerUnifiedPlugin};
pub use resources::*;
pub use state_store::{Notice, NoticeStore, SessionStore, SessionSummary, StateStores};
