//! Rendering systems for the explorer scene.
//!
//! Meshes are attached to logic entities when they appear, so the level
//! loader stays renderer-agnostic. World labels are UI text nodes placed
//! over the projected anchor point every frame.

use std::f32::consts::FRAC_PI_2;

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::bevy::systems::{CAMERA_POSITION, GROUND_SIZE, PASSWORD_BLOCK_SIZE};
use crate::bevy::{
    Avatar, Clickable, ExplorerSettings, MainCamera, PasswordBlock, PointerAction,
    PointerRayEvent, WorldLabel,
};
use crate::level::AVATAR_TEXTURE;

/// Grid cell size of the ground.
const GROUND_CELL: f32 = 4.0;

/// Bounds for projected label font sizes, in pixels.
const MIN_LABEL_PX: f32 = 1.0;
const MAX_LABEL_PX: f32 = 512.0;

/// Font handle for world labels. `None` uses the built-in font.
#[derive(Resource, Debug, Clone, Default)]
pub struct LabelFont(pub Option<Handle<Font>>);

/// UI text node that follows a `WorldLabel` entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct LabelFor(pub Entity);

// ============================================================================
// Setup
// ============================================================================

/// Spawns the perspective camera and the directional light.
pub fn setup_camera_and_lights(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        MainCamera,
        Projection::Perspective(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Tonemapping::None,
        Transform::from_translation(CAMERA_POSITION),
    ));

    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub fn load_label_font(
    mut commands: Commands,
    settings: Res<ExplorerSettings>,
    asset_server: Res<AssetServer>,
) {
    let handle = settings.font.as_ref().map(|path| {
        tracing::info!("[render] label font {}", path);
        asset_server.load(path.clone())
    });
    commands.insert_resource(LabelFont(handle));
}

// ============================================================================
// Input
// ============================================================================

/// Converts the window cursor and left mouse button into pointer rays.
pub fn emit_pointer_rays(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut last_cursor: Local<Option<Vec2>>,
    mut last_ray: Local<Option<Ray3d>>,
    mut rays: MessageWriter<PointerRayEvent>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    if let Some(cursor) = window.cursor_position() {
        if let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) {
            *last_ray = Some(ray);
            if *last_cursor != Some(cursor) {
                rays.write(PointerRayEvent {
                    ray,
                    action: PointerAction::Move,
                });
            }
        }
        *last_cursor = Some(cursor);
    }

    // Releases outside the canvas still end a drag
    let Some(ray) = *last_ray else {
        return;
    };
    if mouse.just_pressed(MouseButton::Left) && window.cursor_position().is_some() {
        rays.write(PointerRayEvent {
            ray,
            action: PointerAction::Press,
        });
    }
    if mouse.just_released(MouseButton::Left) {
        rays.write(PointerRayEvent {
            ray,
            action: PointerAction::Release,
        });
    }
}

// ============================================================================
// Meshes
// ============================================================================

/// Draws the ground as a wireframe grid on y = 0.
pub fn draw_ground_grid(mut gizmos: Gizmos) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cells = (GROUND_SIZE / GROUND_CELL) as u32;
    gizmos.grid(
        Isometry3d::new(Vec3::ZERO, Quat::from_rotation_x(-FRAC_PI_2)),
        UVec2::splat(cells),
        Vec2::splat(GROUND_CELL),
        Color::srgb_u8(0, 255, 0),
    );
}

fn textured_material(texture: Handle<Image>) -> StandardMaterial {
    StandardMaterial {
        base_color_texture: Some(texture),
        unlit: true,
        double_sided: true,
        cull_mode: None,
        alpha_mode: AlphaMode::Blend,
        ..default()
    }
}

pub fn attach_avatar_visual(
    mut commands: Commands,
    avatars: Query<(Entity, &Avatar), Added<Avatar>>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, avatar) in &avatars {
        let texture = asset_server.load(AVATAR_TEXTURE);
        commands.entity(entity).try_insert((
            Mesh3d(meshes.add(Circle::new(avatar.radius))),
            MeshMaterial3d(materials.add(textured_material(texture))),
            Visibility::default(),
        ));
    }
}

pub fn attach_clickable_visuals(
    mut commands: Commands,
    clickables: Query<(Entity, &Clickable), Added<Clickable>>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, clickable) in &clickables {
        let texture = asset_server.load(clickable.texture.clone());
        commands.entity(entity).try_insert((
            Mesh3d(meshes.add(Rectangle::new(1.0, 1.0))),
            MeshMaterial3d(materials.add(textured_material(texture))),
            Visibility::default(),
        ));
    }
}

pub fn attach_password_visuals(
    mut commands: Commands,
    blocks: Query<(Entity, &PasswordBlock), Added<PasswordBlock>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, block) in &blocks {
        let color = if block.is_safe {
            Color::srgb_u8(0, 255, 0)
        } else {
            Color::srgb_u8(255, 0, 0)
        };
        commands.entity(entity).try_insert((
            Mesh3d(meshes.add(Cuboid::from_size(PASSWORD_BLOCK_SIZE))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                unlit: true,
                ..default()
            })),
            Visibility::default(),
        ));
    }
}

// ============================================================================
// World labels
// ============================================================================

pub fn spawn_world_labels(
    mut commands: Commands,
    labels: Query<(Entity, &WorldLabel), Added<WorldLabel>>,
    font: Res<LabelFont>,
) {
    for (entity, label) in &labels {
        let [r, g, b] = label.color;
        let mut text_font = TextFont::default();
        if let Some(handle) = &font.0 {
            text_font.font = handle.clone();
        }

        commands.spawn((
            Name::new(format!("Label {}", label.text)),
            LabelFor(entity),
            Text::new(label.text.clone()),
            text_font,
            TextColor(Color::srgb_u8(r, g, b)),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            Visibility::Hidden,
        ));
    }
}

/// Top-left corner and font size of a label from its projected baseline
/// and top points.
fn label_layout(base_px: Vec2, top_px: Vec2) -> (Vec2, f32) {
    let font_px = (base_px.y - top_px.y).abs().clamp(MIN_LABEL_PX, MAX_LABEL_PX);
    (Vec2::new(base_px.x, base_px.y - font_px), font_px)
}

/// Places each label over its anchor and scales it to its world height.
///
/// Runs in `Update` from local transforms so the UI layout pass of the same
/// frame sees the new position. Anchors and the camera have no parents.
pub fn position_world_labels(
    cameras: Query<(&Camera, &Transform), With<MainCamera>>,
    anchors: Query<(&Transform, &WorldLabel)>,
    mut labels: Query<(&LabelFor, &mut Node, &mut TextFont, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let camera_transform = GlobalTransform::from(*camera_transform);

    for (label_for, mut node, mut font, mut visibility) in &mut labels {
        let Ok((anchor, world_label)) = anchors.get(label_for.0) else {
            continue;
        };

        let base = anchor.translation;
        let top = base + Vec3::Y * world_label.size;
        let (Ok(base_px), Ok(top_px)) = (
            camera.world_to_viewport(&camera_transform, base),
            camera.world_to_viewport(&camera_transform, top),
        ) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        let (corner, font_px) = label_layout(base_px, top_px);
        if (font.font_size - font_px).abs() > f32::EPSILON {
            font.font_size = font_px;
        }
        node.left = Val::Px(corner.x);
        node.top = Val::Px(corner.y);
        *visibility = Visibility::Inherited;
    }
}

/// Removes labels whose anchor entity is gone.
pub fn cleanup_orphan_labels(
    mut commands: Commands,
    labels: Query<(Entity, &LabelFor)>,
    anchors: Query<(), With<WorldLabel>>,
) {
    for (entity, label_for) in &labels {
        if anchors.get(label_for.0).is_err() {
            commands.entity(entity).despawn();
        }
    }
}
