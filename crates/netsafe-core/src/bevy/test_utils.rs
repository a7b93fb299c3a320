//! Test utilities for headless Bevy integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that uses
//! `MinimalPlugins` + `ExplorerHeadlessPlugin` for testing scene logic
//! without a rendering or windowing backend.

use bevy::prelude::*;

use crate::bevy::plugin::ExplorerHeadlessPlugin;
use crate::bevy::resources::{CommandQueue, ExplorationSession, GameCommand};
use crate::bevy::state_store::{Notice, SessionSummary, StateStores};
use crate::bevy::{Avatar, Clickable, LevelObject, PasswordBlock, PointerAction, PointerRayEvent};
use crate::config::ExplorerConfig;
use crate::session::Session;

pub(crate) use crate::bevy::systems::CAMERA_POSITION;

/// A headless Bevy app wrapper for testing.
///
/// Provides convenience methods for pushing commands, feeding pointer
/// rays and inspecting the scene and the shared stores.
pub(crate) struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Create a new test app with the default config.
    pub fn new() -> Self {
        Self::with_config(ExplorerConfig::default())
    }

    pub fn with_config(config: ExplorerConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(ExplorerHeadlessPlugin {
            config,
            command_queue: None,
            state_stores: None,
        });
        // Run one update to spawn the scene fixtures
        app.update();
        Self { app }
    }

    /// Run a single frame update.
    pub fn update(&mut self) {
        self.app.update();
    }

    /// Push a command to the command queue.
    pub fn push_command(&mut self, cmd: GameCommand) {
        self.app.world().resource::<CommandQueue>().push(cmd);
    }

    pub fn start_exploration(&mut self) {
        self.push_command(GameCommand::StartExploration);
        self.update();
    }

    pub fn close_modal(&mut self) {
        self.push_command(GameCommand::CloseModal);
        self.update();
    }

    pub fn select_level(&mut self, level: i64) {
        self.push_command(GameCommand::SelectLevel { level });
        self.update();
    }

    /// Queue a pointer ray for the next update.
    pub fn pointer(&mut self, ray: Ray3d, action: PointerAction) {
        self.app
            .world_mut()
            .write_message(PointerRayEvent { ray, action });
    }

    /// Press and release the pointer on a world point seen from the camera.
    pub fn click_at(&mut self, target: Vec3) {
        let ray = Ray3d::new(
            CAMERA_POSITION,
            Dir3::new(target - CAMERA_POSITION).expect("target equals camera position"),
        );
        self.pointer(ray, PointerAction::Press);
        self.pointer(ray, PointerAction::Release);
        self.update();
    }

    pub fn session(&self) -> &Session {
        &self.app.world().resource::<ExplorationSession>().0
    }

    pub fn stores(&self) -> &StateStores {
        self.app.world().resource::<StateStores>()
    }

    pub fn session_summary(&self) -> SessionSummary {
        self.stores().session.get_summary()
    }

    pub fn take_notices(&self) -> Vec<Notice> {
        self.stores().notices.take()
    }

    pub fn avatar_translation(&mut self) -> Vec3 {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<Avatar>>();
        query.single(world).expect("avatar missing").translation
    }

    pub fn password_translation(&mut self, text: &str) -> Vec3 {
        let world = self.app.world_mut();
        let mut query = world.query::<(&PasswordBlock, &Transform)>();
        query
            .iter(world)
            .find(|(block, _)| block.text == text)
            .map(|(_, transform)| transform.translation)
            .expect("password block missing")
    }

    pub fn query_clickables(&mut self) -> Vec<Clickable> {
        let world = self.app.world_mut();
        let mut query = world.query::<&Clickable>();
        query.iter(world).cloned().collect()
    }

    pub fn find_clickable(&mut self, domain: &str) -> Option<Entity> {
        let world = self.app.world_mut();
        let mut query = world.query::<(Entity, &Clickable)>();
        query
            .iter(world)
            .find(|(_, clickable)| clickable.domain == domain)
            .map(|(entity, _)| entity)
    }

    pub fn level_objects(&mut self) -> Vec<LevelObject> {
        let world = self.app.world_mut();
        let mut query = world.query::<&LevelObject>();
        query.iter(world).copied().collect()
    }

    pub fn level_object_count(&mut self) -> usize {
        self.level_objects().len()
    }

    /// Get a reference to the World.
    pub fn world(&self) -> &World {
        self.app.world()
    }

    /// Get a mutable reference to the World.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
