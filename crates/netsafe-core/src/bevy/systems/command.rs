//! Command processing system.
//!
//! Processes commands from the JavaScript/WASM interface.

use bevy::prelude::*;

use crate::bevy::systems::session;
use crate::bevy::{CommandQueue, ExplorationSession, GameCommand, LoadLevelEvent, StateStores};

/// System to process all commands from the external command queue.
///
/// Handles commands until a Yield is encountered, applying each one to the
/// session before the next so they take effect in queue order.
/// Commands after Yield are processed in the next frame.
pub fn process_commands(
    command_queue: Res<CommandQueue>,
    mut exploration: ResMut<ExplorationSession>,
    stores: Res<StateStores>,
    mut load_events: MessageWriter<LoadLevelEvent>,
) {
    for command in command_queue.drain_until_yield() {
        match command {
            GameCommand::StartExploration => {
                tracing::info!("[command] StartExploration");
                session::start_exploration(&mut exploration.0, &stores, &mut load_events);
            }
            GameCommand::CloseModal => {
                tracing::info!("[command] CloseModal");
                exploration.0.close_modal();
            }
            GameCommand::SelectLevel { level } => {
                tracing::info!("[command] SelectLevel: {}", level);
                session::select_level(&mut exploration.0, level, &stores, &mut load_events);
            }
            GameCommand::RejectLevel { raw } => {
                tracing::info!("[command] RejectLevel: {}", raw);
                session::reject_level(&stores, format_args!("level is not a whole number: {raw}"));
            }
            // Yield is consumed by drain_until_yield(), should not reach here
            GameCommand::Yield => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bevy::test_utils::TestApp;
    use crate::bevy::{GameCommand, Notice};
    use crate::level::{INVALID_LEVEL_ALERT, Level};

    #[test]
    fn test_yield_defers_to_next_frame() {
        let mut app = TestApp::new();
        app.push_command(GameCommand::SelectLevel { level: 1 });
        app.push_command(GameCommand::Yield);
        app.push_command(GameCommand::SelectLevel { level: 3 });

        app.update();
        assert_eq!(app.session().current_level, Some(Level::One));
        assert_eq!(app.session().score, 10);

        app.update();
        assert_eq!(app.session().current_level, Some(Level::Three));
        assert_eq!(app.session().score, 20);
    }

    #[test]
    fn test_commands_in_same_frame_apply_in_order() {
        let mut app = TestApp::new();
        app.push_command(GameCommand::StartExploration);
        app.push_command(GameCommand::CloseModal);
        app.update();

        let session = app.session();
        assert!(session.score_visible);
        assert!(!session.modal_visible);
        assert!(!session.exploration_started);
    }

    #[test]
    fn test_select_then_start_ends_on_level_one() {
        let mut app = TestApp::new();
        app.push_command(GameCommand::SelectLevel { level: 2 });
        app.push_command(GameCommand::StartExploration);
        app.update();

        assert_eq!(app.session().current_level, Some(Level::One));
        assert_eq!(app.session().active_link, Some(Level::Two));
        assert_eq!(app.session().score, 10);

        let objects = app.level_objects();
        assert_eq!(objects.len(), Level::One.objects().len());
        assert!(objects.iter().all(|o| o.level == Level::One));
    }

    #[test]
    fn test_close_then_start_shows_modal() {
        let mut app = TestApp::new();
        app.push_command(GameCommand::CloseModal);
        app.push_command(GameCommand::StartExploration);
        app.update();

        let session = app.session();
        assert!(session.modal_visible);
        assert!(session.exploration_started);
        assert_eq!(session.start_button_color.css(), "#FF4500");
    }

    #[test]
    fn test_rejected_level_alerts_in_queue_order() {
        let mut app = TestApp::new();
        app.push_command(GameCommand::RejectLevel {
            raw: "2.5".to_string(),
        });
        app.push_command(GameCommand::SelectLevel { level: 3 });
        app.update();

        assert_eq!(
            app.take_notices(),
            vec![
                Notice::Alert(INVALID_LEVEL_ALERT.to_string()),
                Notice::Alert("Επιλέξατε το Επίπεδο 3".to_string()),
            ]
        );
        assert_eq!(app.session().current_level, Some(Level::Three));
    }
}
