//! ECS Resources for the explorer scene.
//!
//! These resources hold shared session state and configuration.

use std::collections::VecDeque;
use std::sync::Arc;

use bevy::prelude::*;
use parking_lot::Mutex;

use crate::config::ExplorerConfig;
use crate::level::Level;
use crate::session::Session;

/// Session state behind the page chrome.
#[derive(Resource, Debug, Clone, Default)]
pub struct ExplorationSession(pub Session);

impl ExplorationSession {
    pub fn new(score_step: u32) -> Self {
        Self(Session::new(score_step))
    }
}

/// Settings resolved from `ExplorerConfig` at startup.
#[derive(Resource, Debug, Clone, Default)]
pub struct ExplorerSettings {
    /// Font asset path for world labels.
    pub font: Option<String>,
}

impl From<&ExplorerConfig> for ExplorerSettings {
    fn from(config: &ExplorerConfig) -> Self {
        Self {
            font: config.font.clone(),
        }
    }
}

/// Active password drag.
#[derive(Resource, Debug, Default)]
pub struct DragState {
    /// Entity being dragged.
    pub entity: Option<Entity>,
    /// Hit point minus block position at the moment the drag started.
    pub offset: Vec2,
}

impl DragState {
    pub fn begin(&mut self, entity: Entity, offset: Vec2) {
        self.entity = Some(entity);
        self.offset = offset;
    }

    pub fn end(&mut self) {
        self.entity = None;
        self.offset = Vec2::ZERO;
    }

    pub fn is_dragging(&self) -> bool {
        self.entity.is_some()
    }
}

/// Commands that can be sent from JavaScript to the Bevy app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    /// Enter level one, reveal the score and open the introduction modal.
    StartExploration,
    /// Close the introduction modal.
    CloseModal,
    /// Select a level from the sidebar. The number is validated by the session.
    SelectLevel { level: i64 },
    /// A level value that is not a whole number. Raises the invalid-level alert.
    RejectLevel { raw: String },
    /// Frame boundary marker - commands after this are processed in the next frame.
    Yield,
}

impl GameCommand {
    /// Builds a level selection from a JavaScript number.
    ///
    /// Values that are not whole numbers become `RejectLevel`.
    pub fn select_level(value: f64) -> Self {
        match Level::whole_number(value) {
            Some(level) => Self::SelectLevel { level },
            None => Self::RejectLevel {
                raw: value.to_string(),
            },
        }
    }
}

/// Thread-safe command queue for WASM interop.
///
/// This allows JavaScript to push commands that will be processed
/// by Bevy systems on the next frame.
#[derive(Resource, Clone)]
pub struct CommandQueue {
    inner: Arc<Mutex<VecDeque<GameCommand>>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Push a command to be processed.
    pub fn push(&self, command: GameCommand) {
        self.inner.lock().push_back(command);
    }

    /// Drain commands until Yield or empty.
    ///
    /// Returns commands up to (not including) Yield.
    /// Yield itself is consumed but not returned.
    pub fn drain_until_yield(&self) -> Vec<GameCommand> {
        let mut guard = self.inner.lock();
        let mut commands = Vec::new();

        while let Some(cmd) = guard.pop_front() {
            if matches!(cmd, GameCommand::Yield) {
                tracing::debug!("[command] Yield - deferring remaining commands to next frame");
                break;
            }
            commands.push(cmd);
        }

        commands
    }

    /// Clear all pending commands.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_until_yield_splits_frames() {
        let queue = CommandQueue::new();
        queue.push(GameCommand::StartExploration);
        queue.push(GameCommand::Yield);
        queue.push(GameCommand::SelectLevel { level: 2 });
        queue.push(GameCommand::CloseModal);

        assert_eq!(queue.drain_until_yield(), vec![GameCommand::StartExploration]);
        assert_eq!(
            queue.drain_until_yield(),
            vec![GameCommand::SelectLevel { level: 2 }, GameCommand::CloseModal]
        );
        assert!(queue.drain_until_yield().is_empty());
    }

    #[test]
    fn test_select_level_from_js_number() {
        assert_eq!(
            GameCommand::select_level(4.0),
            GameCommand::SelectLevel { level: 4 }
        );
        assert_eq!(
            GameCommand::select_level(2.5),
            GameCommand::RejectLevel {
                raw: "2.5".to_string()
            }
        );
        assert!(matches!(
            GameCommand::select_level(f64::NAN),
            GameCommand::RejectLevel { .. }
        ));
    }

    #[test]
    fn test_clones_share_queue() {
        let queue = CommandQueue::new();
        let handle = queue.clone();
        handle.push(GameCommand::CloseModal);
        assert_eq!(queue.drain_until_yield(), vec![GameCommand::CloseModal]);

        handle.push(GameCommand::Yield);
        handle.push(GameCommand::StartExploration);
        queue.clear();
        assert!(handle.drain_until_yield().is_empty());
    }

    #[test]
    fn test_drag_state() {
        let mut drag = DragState::default();
        assert!(!drag.is_dragging());

        drag.begin(Entity::PLACEHOLDER, Vec2::new(0.25, -0.1));
        assert!(drag.is_dragging());

        drag.end();
        assert!(!drag.is_dragging());
        assert_eq!(drag.offset, Vec2::ZERO);
    }
}
