//! Pointer systems: avatar following, click picking and password dragging.
//!
//! All systems consume `PointerRayEvent`s, so they run headless. The rays
//! themselves come from the window cursor in the rendering layer.

use bevy::math::bounding::{Aabb3d, RayCast3d};
use bevy::prelude::*;

use crate::bevy::{
    Avatar, Clickable, DragState, Ground, LevelObject, Notice, ObjectClickedEvent, PasswordBlock,
    Pickable, PointerAction, PointerRayEvent, StateStores,
};
use crate::level::ClickAction;

/// Upper bound for pick distances; matches the camera far plane.
const MAX_PICK_DISTANCE: f32 = 1000.0;

// ============================================================================
// Ray math
// ============================================================================

/// Intersects a ray with the square ground plane on y = 0.
///
/// Hits outside the plane's extent are ignored.
pub fn ground_hit(ray: Ray3d, half_extent: f32) -> Option<Vec3> {
    let distance = ray.intersect_plane(Vec3::ZERO, InfinitePlane3d::new(Vec3::Y))?;
    let point = ray.get_point(distance);
    (point.x.abs() <= half_extent && point.z.abs() <= half_extent).then_some(point)
}

/// Distance along the ray to an axis-aligned box, if it is hit.
pub fn bounds_hit(ray: Ray3d, center: Vec3, half_extents: Vec3) -> Option<f32> {
    let aabb = Aabb3d::new(center, half_extents);
    RayCast3d::from_ray(ray, MAX_PICK_DISTANCE).aabb_intersection_at(&aabb)
}

/// Intersects a ray with the vertical plane z = `depth`.
pub fn depth_plane_hit(ray: Ray3d, depth: f32) -> Option<Vec3> {
    let origin = Vec3::new(0.0, 0.0, depth);
    let distance = ray.intersect_plane(origin, InfinitePlane3d::new(Vec3::Z))?;
    Some(ray.get_point(distance))
}

// ============================================================================
// Systems
// ============================================================================

/// Moves the avatar across the ground to follow the pointer.
///
/// Only x and z change; the avatar keeps its height.
pub fn follow_pointer_with_avatar(
    mut rays: MessageReader<PointerRayEvent>,
    grounds: Query<&Ground>,
    mut avatars: Query<&mut Transform, With<Avatar>>,
) {
    let Ok(ground) = grounds.single() else {
        return;
    };
    let Some(point) = rays
        .read()
        .filter_map(|event| ground_hit(event.ray, ground.half_extent))
        .last()
    else {
        return;
    };

    for mut transform in &mut avatars {
        transform.translation.x = point.x;
        transform.translation.z = point.z;
    }
}

/// Picks the nearest level object under a pointer press.
///
/// Password blocks start a drag; clickables emit `ObjectClickedEvent`.
pub fn pick_on_press(
    mut rays: MessageReader<PointerRayEvent>,
    pickables: Query<
        (Entity, &Transform, &Pickable, Has<Clickable>, Has<PasswordBlock>),
        With<LevelObject>,
    >,
    mut drag: ResMut<DragState>,
    mut clicked: MessageWriter<ObjectClickedEvent>,
) {
    for event in rays.read() {
        if event.action != PointerAction::Press {
            continue;
        }

        let nearest = pickables
            .iter()
            .filter_map(|(entity, transform, pickable, is_clickable, is_password)| {
                bounds_hit(event.ray, transform.translation, pickable.half_extents)
                    .map(|distance| (distance, entity, transform, is_clickable, is_password))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0));

        let Some((_, entity, transform, is_clickable, is_password)) = nearest else {
            continue;
        };

        if is_password {
            if let Some(hit) = depth_plane_hit(event.ray, transform.translation.z) {
                let offset = hit.truncate() - transform.translation.truncate();
                tracing::info!("[pointer] drag start {:?}", entity);
                drag.begin(entity, offset);
            }
        } else if is_clickable {
            clicked.write(ObjectClickedEvent { entity });
        }
    }
}

/// Moves the dragged password block in its vertical plane.
pub fn drag_password_blocks(
    mut rays: MessageReader<PointerRayEvent>,
    mut drag: ResMut<DragState>,
    mut blocks: Query<&mut Transform, With<PasswordBlock>>,
) {
    for event in rays.read() {
        let Some(entity) = drag.entity else {
            continue;
        };

        match event.action {
            PointerAction::Release => {
                tracing::info!("[pointer] drag end {:?}", entity);
                drag.end();
            }
            PointerAction::Move => {
                let Ok(mut transform) = blocks.get_mut(entity) else {
                    drag.end();
                    continue;
                };
                if let Some(hit) = depth_plane_hit(event.ray, transform.translation.z) {
                    transform.translation.x = hit.x - drag.offset.x;
                    transform.translation.y = hit.y - drag.offset.y;
                }
            }
            PointerAction::Press => {}
        }
    }
}

/// Runs the action of each clicked object, at most once per object.
pub fn activate_clicked_objects(
    mut commands: Commands,
    mut events: MessageReader<ObjectClickedEvent>,
    mut clickables: Query<&mut Clickable>,
    stores: Res<StateStores>,
) {
    for event in events.read() {
        let Ok(mut clickable) = clickables.get_mut(event.entity) else {
            continue;
        };

        if !clickable.enabled {
            tracing::info!("[pointer] Raycast disabled for {}", clickable.domain);
            continue;
        }

        tracing::info!("[pointer] clicked {}", clickable.domain);
        stores
            .notices
            .push(Notice::Alert(format!("Κλικ στο {}", clickable.domain)));

        match &clickable.action {
            ClickAction::OpenUrl(url) => {
                stores.notices.push(Notice::OpenUrl(url.clone()));
            }
            ClickAction::Vanish => {
                tracing::info!("[pointer] {}", clickable.domain);
                commands.entity(event.entity).despawn();
            }
        }

        clickable.enabled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bevy::test_utils::{CAMERA_POSITION, TestApp};
    use crate::bevy::{GameCommand, ObjectClickedEvent};
    use crate::level::Level;

    fn ray_towards(target: Vec3) -> Ray3d {
        Ray3d::new(
            CAMERA_POSITION,
            Dir3::new(target - CAMERA_POSITION).unwrap(),
        )
    }

    #[test]
    fn test_ground_hit_inside_extent() {
        let hit = ground_hit(ray_towards(Vec3::new(3.0, 0.0, -4.0)), 100.0).unwrap();
        assert!((hit - Vec3::new(3.0, 0.0, -4.0)).length() < 1e-4);
    }

    #[test]
    fn test_ground_hit_misses_above_horizon_and_outside() {
        // Pointing upward never reaches the ground
        assert!(ground_hit(ray_towards(Vec3::new(0.0, 3.0, 0.0)), 100.0).is_none());
        // Beyond the plane's edge
        assert!(ground_hit(ray_towards(Vec3::new(150.0, 0.0, 0.0)), 100.0).is_none());
    }

    #[test]
    fn test_bounds_hit_near_box_only() {
        let ray = ray_towards(Vec3::new(0.0, 1.0, -5.0));
        let near = bounds_hit(ray, Vec3::new(0.0, 1.0, -5.0), Vec3::splat(0.5)).unwrap();
        let far = bounds_hit(ray, Vec3::new(0.0, 1.0, -20.0), Vec3::splat(0.5));
        assert!(near > 0.0);
        // The ray dips below the far box before reaching it
        assert!(far.is_none());
    }

    #[test]
    fn test_depth_plane_hit() {
        let hit = depth_plane_hit(ray_towards(Vec3::new(1.0, 1.5, 0.0)), 0.0).unwrap();
        assert!((hit - Vec3::new(1.0, 1.5, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_avatar_follows_pointer_on_ground() {
        let mut app = TestApp::new();
        let before = app.avatar_translation();

        app.pointer(ray_towards(Vec3::new(-2.0, 0.0, -3.0)), PointerAction::Move);
        app.update();

        let after = app.avatar_translation();
        assert!((after.x - -2.0).abs() < 1e-3);
        assert!((after.z - -3.0).abs() < 1e-3);
        assert_eq!(after.y, before.y);
    }

    #[test]
    fn test_avatar_ignores_rays_missing_ground() {
        let mut app = TestApp::new();
        let before = app.avatar_translation();

        app.pointer(ray_towards(Vec3::new(0.0, 5.0, -3.0)), PointerAction::Move);
        app.update();

        assert_eq!(app.avatar_translation(), before);
    }

    #[test]
    fn test_clickable_fires_exactly_once() {
        let mut app = TestApp::new();
        app.select_level(1);
        app.take_notices();

        let youtube = Vec3::new(-5.0, 1.0, -10.0);
        app.click_at(youtube);
        app.click_at(youtube);

        assert_eq!(
            app.take_notices(),
            vec![
                Notice::Alert("Κλικ στο https://www.youtube.com/".to_string()),
                Notice::OpenUrl("https://www.youtube.com/".to_string()),
            ]
        );
        let disabled = app.query_clickables().iter().filter(|c| !c.enabled).count();
        assert_eq!(disabled, 1);
    }

    #[test]
    fn test_cyberbully_vanishes_on_click() {
        let mut app = TestApp::new();
        app.select_level(3);
        assert_eq!(app.level_object_count(), 1);
        app.take_notices();

        app.click_at(Vec3::new(1.0, 1.0, -5.0));

        assert_eq!(app.level_object_count(), 0);
        assert_eq!(
            app.take_notices(),
            vec![Notice::Alert(
                "Κλικ στο Κακές Λέξεις, Προσβλητικά Σχόλια".to_string()
            )]
        );
    }

    #[test]
    fn test_disabled_clickable_is_ignored() {
        let mut app = TestApp::new();
        app.select_level(1);
        app.take_notices();

        let google = app.find_clickable("https://www.google.com/").unwrap();
        app.world_mut().get_mut::<Clickable>(google).unwrap().enabled = false;

        app.world_mut().write_message(ObjectClickedEvent { entity: google });
        app.update();

        assert!(app.take_notices().is_empty());
    }

    #[test]
    fn test_click_on_empty_space_does_nothing() {
        let mut app = TestApp::new();
        app.select_level(1);
        app.take_notices();

        app.click_at(Vec3::new(0.0, 1.0, -10.0));
        assert!(app.take_notices().is_empty());
    }

    #[test]
    fn test_password_block_drags_in_its_plane() {
        let mut app = TestApp::new();
        app.select_level(4);

        // Block "password123" sits at (3, 1, 0); grab it slightly right of centre
        let grab = Vec3::new(3.2, 1.0, 0.0);
        app.pointer(ray_towards(grab), PointerAction::Press);
        app.update();
        assert!(app.world().resource::<DragState>().is_dragging());

        app.pointer(ray_towards(Vec3::new(1.2, 2.0, 0.0)), PointerAction::Move);
        app.update();

        let moved = app.password_translation("password123");
        assert!((moved.x - 1.0).abs() < 1e-3);
        assert!((moved.y - 2.0).abs() < 1e-3);
        assert_eq!(moved.z, 0.0);

        app.pointer(ray_towards(Vec3::new(1.2, 2.0, 0.0)), PointerAction::Release);
        app.update();
        assert!(!app.world().resource::<DragState>().is_dragging());

        app.pointer(ray_towards(Vec3::new(-1.0, 0.5, 0.0)), PointerAction::Move);
        app.update();
        assert_eq!(app.password_translation("password123"), moved);
    }

    #[test]
    fn test_level_change_drops_drag() {
        let mut app = TestApp::new();
        app.select_level(4);

        app.pointer(ray_towards(Vec3::new(-3.0, 1.0, 0.0)), PointerAction::Press);
        app.update();
        assert!(app.world().resource::<DragState>().is_dragging());

        app.push_command(GameCommand::SelectLevel { level: 2 });
        app.update();
        assert!(!app.world().resource::<DragState>().is_dragging());
        assert_eq!(app.session().current_level, Some(Level::Two));
    }
}
