//! ECS Components for the explorer scene.

use bevy::prelude::*;

use crate::level::{ClickAction, Level};

/// Marker component for the main scene camera.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MainCamera;

/// The ground plane the avatar walks on.
///
/// Lies on y = 0, centred on the origin.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ground {
    /// Half of the side length of the square plane.
    pub half_extent: f32,
}

impl Default for Ground {
    fn default() -> Self {
        Self { half_extent: 100.0 }
    }
}

/// The player-controlled avatar. Persists across level changes.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Avatar {
    pub radius: f32,
}

/// Marker for entities owned by the active level.
///
/// Everything carrying this is despawned when another level loads.
#[derive(Component, Debug, Clone, Copy)]
pub struct LevelObject {
    pub level: Level,
}

/// Textured object that reacts to a single click.
#[derive(Component, Debug, Clone)]
pub struct Clickable {
    pub texture: String,
    pub domain: String,
    pub action: ClickAction,
    /// Cleared after the first successful click.
    pub enabled: bool,
}

impl Clickable {
    pub fn new(texture: String, domain: String, action: ClickAction) -> Self {
        Self {
            texture,
            domain,
            action,
            enabled: true,
        }
    }
}

/// Password box of the matching level.
#[derive(Component, Debug, Clone)]
pub struct PasswordBlock {
    pub text: String,
    pub is_safe: bool,
}

/// Text drawn at the entity's world position.
#[derive(Component, Debug, Clone)]
pub struct WorldLabel {
    pub text: String,
    /// Glyph height in world units.
    pub size: f32,
    pub color: [u8; 3],
}

/// Axis-aligned bounds used for pointer ray tests.
#[derive(Component, Debug, Clone, Copy)]
pub struct Pickable {
    pub half_extents: Vec3,
}

impl Pickable {
    /// Flat quad of the given size lying in the XY plane.
    pub fn quad(width: f32, height: f32) -> Self {
        Self {
            half_extents: Vec3::new(width / 2.0, height / 2.0, 0.01),
        }
    }

    pub fn cuboid(size: Vec3) -> Self {
        Self {
            half_extents: size / 2.0,
        }
    }
}
