//! Scene fixtures and level object lifecycle.

use bevy::prelude::*;

use crate::bevy::{
    Avatar, Clickable, DragState, Ground, LevelObject, LoadLevelEvent,
    PasswordBlock, Pickable, WorldLabel,
};
use crate::level::{Level, LevelObjectSpec};

/// Position of the scene camera.
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 2.0, 5.0);

/// Side length of the square ground plane.
pub const GROUND_SIZE: f32 = 200.0;

/// Radius of the avatar disc.
pub const AVATAR_RADIUS: f32 = 1.0;

/// Password box dimensions.
pub const PASSWORD_BLOCK_SIZE: Vec3 = Vec3::new(1.0, 0.2, 0.5);

/// Glyph height of password labels in world units.
const PASSWORD_LABEL_SIZE: f32 = 0.15;

/// Spawns the ground and the avatar. Both outlive every level.
pub fn spawn_scene_fixtures(mut commands: Commands) {
    commands.spawn((
        Name::new("Ground"),
        Ground {
            half_extent: GROUND_SIZE / 2.0,
        },
        Transform::IDENTITY,
    ));

    commands.spawn((
        Name::new("Avatar"),
        Avatar {
            radius: AVATAR_RADIUS,
        },
        Transform::from_xyz(0.0, 1.0, 0.0),
    ));

    tracing::info!("[level] scene fixtures spawned");
}

/// Replaces the current level objects with those of the requested level.
///
/// When several loads arrive in one frame only the last one is applied.
pub fn handle_load_level(
    mut commands: Commands,
    mut events: MessageReader<LoadLevelEvent>,
    existing: Query<Entity, With<LevelObject>>,
    mut drag: ResMut<DragState>,
) {
    let Some(level) = events.read().last().map(|event| event.level) else {
        return;
    };

    for entity in &existing {
        commands.entity(entity).despawn();
    }
    drag.end();

    let objects = level.objects();
    for spec in &objects {
        spawn_level_object(&mut commands, level, spec);
    }

    tracing::info!(
        "[level] loaded '{}' with {} objects",
        level.title(),
        objects.len()
    );
}

fn spawn_level_object(commands: &mut Commands, level: Level, spec: &LevelObjectSpec) {
    let transform = Transform::from_translation(Vec3::from_array(spec.position()));
    let marker = LevelObject { level };

    match spec {
        LevelObjectSpec::Clickable {
            texture,
            domain,
            action,
            ..
        } => {
            commands.spawn((
                Name::new(format!("Clickable {domain}")),
                marker,
                transform,
                Clickable::new(texture.clone(), domain.clone(), action.clone()),
                Pickable::quad(1.0, 1.0),
            ));
        }
        LevelObjectSpec::Sign {
            text, size, color, ..
        } => {
            commands.spawn((
                Name::new(format!("Sign {text}")),
                marker,
                transform,
                WorldLabel {
                    text: text.clone(),
                    size: *size,
                    color: *color,
                },
            ));
        }
        LevelObjectSpec::PasswordBlock { text, is_safe, .. } => {
            commands.spawn((
                Name::new(format!("Password {text}")),
                marker,
                transform,
                PasswordBlock {
                    text: text.clone(),
                    is_safe: *is_safe,
                },
                Pickable::cuboid(PASSWORD_BLOCK_SIZE),
                WorldLabel {
                    text: text.clone(),
                    size: PASSWORD_LABEL_SIZE,
                    color: [0xff, 0xff, 0xff],
                },
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bevy::test_utils::TestApp;
    use crate::bevy::{GameCommand, WorldLabel};
    use crate::level::Level;
    use bevy::prelude::*;

    #[test]
    fn test_fixtures_exist_before_any_level() {
        let mut app = TestApp::new();
        assert_eq!(app.level_object_count(), 0);
        assert_eq!(app.avatar_translation(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_only_one_level_is_present() {
        let mut app = TestApp::new();

        for (number, level) in (1..=4).zip(Level::ALL) {
            app.select_level(number);
            let objects = app.level_objects();
            assert_eq!(objects.len(), level.objects().len());
            assert!(objects.iter().all(|o| o.level == level));
        }

        app.select_level(1);
        assert!(app.level_objects().iter().all(|o| o.level == Level::One));
    }

    #[test]
    fn test_last_load_in_frame_wins() {
        let mut app = TestApp::new();
        app.push_command(GameCommand::SelectLevel { level: 4 });
        app.push_command(GameCommand::SelectLevel { level: 2 });
        app.update();

        let objects = app.level_objects();
        assert_eq!(objects.len(), 3);
        assert!(objects.iter().all(|o| o.level == Level::Two));
    }

    #[test]
    fn test_level_two_signs_are_labels() {
        let mut app = TestApp::new();
        app.select_level(2);

        let world = app.world_mut();
        let mut query = world.query::<&WorldLabel>();
        let mut texts: Vec<(String, f32)> = query
            .iter(world)
            .map(|label| (label.text.clone(), label.size))
            .collect();
        texts.sort_by(|a, b| b.1.total_cmp(&a.1));

        assert_eq!(
            texts,
            vec![
                ("google.com".to_string(), 2.0),
                ("https".to_string(), 1.0),
                ("Αυτή είναι μια ασφαλής ιστοσελίδα.".to_string(), 0.5),
            ]
        );
    }

    #[test]
    fn test_reloading_level_restores_objects() {
        let mut app = TestApp::new();
        app.select_level(3);
        app.click_at(Vec3::new(1.0, 1.0, -5.0));
        assert_eq!(app.level_object_count(), 0);

        app.select_level(3);
        assert_eq!(app.level_object_count(), 1);
        assert!(app.query_clickables()[0].enabled);
    }
}
