//! Systems for the explorer scene.
//!
//! Organized by functionality:
//! - command: Command queue processing from WASM
//! - session: Start/close/select operations and effect routing
//! - scene: Fixtures and per-level object spawning
//! - pointer: Avatar following, click picking, password dragging
//! - rendering: Camera, meshes, ground grid and world labels
//! - state_sync: Sync ECS state to shared stores for UI

pub mod command;
pub mod pointer;
pub mod rendering;
pub mod scene;
pub mod session;
pub mod state_sync;

pub use command::*;
pub use pointer::*;
pub use rendering::*;
pub use scene::*;
pub use state_sync::*;
