//! Session operations.
//!
//! Apply start/close/select commands to the `ExplorationSession` and route
//! the resulting effects to the notice store and the level loader.

use bevy::prelude::*;

use crate::bevy::{LoadLevelEvent, Notice, StateStores};
use crate::level::INVALID_LEVEL_ALERT;
use crate::session::{Session, SessionEffect};

fn apply_effects(
    effects: Vec<SessionEffect>,
    stores: &StateStores,
    load_events: &mut MessageWriter<LoadLevelEvent>,
) {
    for effect in effects {
        match effect {
            SessionEffect::Alert(message) => stores.notices.push(Notice::Alert(message)),
            SessionEffect::ScoreChanged(score) => {
                tracing::info!("[session] score {}", score);
            }
            SessionEffect::LoadLevel(level) => {
                load_events.write(LoadLevelEvent { level });
            }
        }
    }
}

pub(crate) fn start_exploration(
    session: &mut Session,
    stores: &StateStores,
    load_events: &mut MessageWriter<LoadLevelEvent>,
) {
    let effects = session.start_exploration();
    tracing::info!("[session] exploration started");
    apply_effects(effects, stores, load_events);
}

/// Validates and applies a sidebar level selection.
///
/// An unknown level number leaves the session untouched and raises the
/// invalid-level alert instead.
pub(crate) fn select_level(
    session: &mut Session,
    level: i64,
    stores: &StateStores,
    load_events: &mut MessageWriter<LoadLevelEvent>,
) {
    match session.select_level(level) {
        Ok(effects) => apply_effects(effects, stores, load_events),
        Err(err) => reject_level(stores, err),
    }
}

/// Raises the invalid-level alert for a rejected selection.
pub(crate) fn reject_level(stores: &StateStores, reason: impl std::fmt::Display) {
    tracing::warn!("[session] {}", reason);
    stores
        .notices
        .push(Notice::Alert(INVALID_LEVEL_ALERT.to_string()));
}

#[cfg(test)]
mod tests {
    use crate::bevy::test_utils::TestApp;
    use crate::bevy::Notice;
    use crate::level::{Level, INVALID_LEVEL_ALERT};

    #[test]
    fn test_start_exploration_loads_level_one() {
        let mut app = TestApp::new();
        app.start_exploration();

        let summary = app.session_summary();
        assert!(summary.score_visible);
        assert!(!summary.start_button_visible);
        assert!(summary.modal_visible);
        assert_eq!(summary.start_button_color, "#FF4500");
        assert_eq!(summary.level_label.as_deref(), Some("Επίπεδο 1"));
        assert_eq!(summary.score, 0);

        assert_eq!(app.level_object_count(), 2);
        assert!(app.take_notices().is_empty());
    }

    #[test]
    fn test_close_modal_hides_modal() {
        let mut app = TestApp::new();
        app.start_exploration();
        app.close_modal();

        let summary = app.session_summary();
        assert!(!summary.modal_visible);
        assert_eq!(summary.start_button_color, "#4caf50");
        // Level one stays loaded
        assert_eq!(summary.title.as_deref(), Some(Level::One.title()));
    }

    #[test]
    fn test_select_level_updates_chrome_and_alerts() {
        let mut app = TestApp::new();
        app.select_level(2);

        let summary = app.session_summary();
        assert_eq!(summary.score, 10);
        assert_eq!(summary.active_link, Some(2));
        assert_eq!(summary.title.as_deref(), Some(Level::Two.title()));
        assert_eq!(summary.description.as_deref(), Some(Level::Two.description()));
        assert_eq!(
            app.take_notices(),
            vec![Notice::Alert("Επιλέξατε το Επίπεδο 2".to_string())]
        );
    }

    #[test]
    fn test_invalid_level_alerts_without_change() {
        let mut app = TestApp::new();
        app.select_level(3);
        app.take_notices();
        let before = app.session().clone();

        app.select_level(0);
        app.select_level(5);

        assert_eq!(app.session(), &before);
        assert_eq!(
            app.take_notices(),
            vec![
                Notice::Alert(INVALID_LEVEL_ALERT.to_string()),
                Notice::Alert(INVALID_LEVEL_ALERT.to_string()),
            ]
        );
        assert!(app.level_objects().iter().all(|o| o.level == Level::Three));
    }

    #[test]
    fn test_store_version_tracks_changes_only() {
        let mut app = TestApp::new();
        let initial = app.stores().session.get_version();

        app.update();
        assert_eq!(app.stores().session.get_version(), initial);

        app.select_level(1);
        assert!(app.stores().session.get_version() > initial);
    }
}
