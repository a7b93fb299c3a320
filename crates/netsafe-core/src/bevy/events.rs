//! ECS Events (Messages) for the explorer scene.
//!
//! These events enable communication between systems.
//! Note: In Bevy 0.18+, buffered events use Message trait instead of Event.

use bevy::prelude::*;

use crate::level::Level;

/// Message to replace the scene objects with those of a level.
#[derive(Message, Debug, Clone)]
pub struct LoadLevelEvent {
    pub level: Level,
}

/// What the pointer did in this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Move,
    Press,
    Release,
}

/// World-space ray under the pointer.
///
/// Produced from the window cursor by the rendering layer, or written
/// directly by tests.
#[derive(Message, Debug, Clone, Copy)]
pub struct PointerRayEvent {
    pub ray: Ray3d,
    pub action: PointerAction,
}

/// Message fired when a pointer press hits a clickable object.
#[derive(Message, Debug, Clone)]
pub struct ObjectClickedEvent {
    pub entity: Entity,
}
