//! NetSafe Explorer Core Library
//!
//! Scene, level and session logic for an internet-safety mini-game.
//!
//! The crate is split in two layers:
//! - Pure modules (`level`, `session`, `config`) with no ECS dependency
//! - Bevy integration (`bevy`) driving the 3D scene, pointer picking and the
//!   shared stores read by the Yew frontend

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod level;
pub mod session;

// Bevy integration
pub mod bevy;

pub use config::{ConfigError, ExplorerConfig};
pub use level::{ClickAction, Level, LevelError, LevelObjectSpec};
pub use session::{Session, SessionEffect, StartButtonColor};
