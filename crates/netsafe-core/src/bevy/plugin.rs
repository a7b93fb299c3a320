//! Bevy plugins for the explorer scene.
//!
//! Provides:
//! - `ExplorerHeadlessPlugin`: Logic-only plugin (no rendering/window dependencies) for headless testing
//! - `ExplorerUnifiedPlugin`: Full plugin including `ExplorerHeadlessPlugin` + rendering systems

use bevy::prelude::*;

use crate::bevy::events::*;
use crate::bevy::resources::*;
use crate::bevy::state_store::StateStores;
use crate::bevy::systems;
use crate::config::ExplorerConfig;

// ============================================================================
// Headless Plugin (logic only, no rendering/window dependencies)
// ============================================================================

/// Headless plugin containing all scene logic without rendering or window dependencies.
///
/// Use this plugin in tests with `MinimalPlugins` to run ECS systems
/// without requiring a windowing or rendering backend.
///
/// Excluded systems (rendering-dependent):
/// - Camera3d and light spawning (`setup_camera_and_lights`)
/// - Cursor to ray conversion (`emit_pointer_rays`)
/// - Mesh, gizmo and label systems
#[derive(Default)]
pub struct ExplorerHeadlessPlugin {
    pub config: ExplorerConfig,
    pub command_queue: Option<CommandQueue>,
    pub state_stores: Option<StateStores>,
}

impl Plugin for ExplorerHeadlessPlugin {
    fn build(&self, app: &mut App) {
        // ====================================================================
        // Resources
        // ====================================================================
        app.insert_resource(ExplorationSession::new(self.config.score_step))
            .insert_resource(ExplorerSettings::from(&self.config))
            .insert_resource(DragState::default())
            .insert_resource(self.command_queue.clone().unwrap_or_default())
            .insert_resource(self.state_stores.clone().unwrap_or_default());

        // ====================================================================
        // Messages
        // ====================================================================
        app.add_message::<LoadLevelEvent>()
            .add_message::<PointerRayEvent>()
            .add_message::<ObjectClickedEvent>();

        // ====================================================================
        // Scene fixtures
        // ====================================================================
        app.add_systems(Startup, systems::spawn_scene_fixtures);

        // ====================================================================
        // Commands, session and level loading
        // ====================================================================
        app.add_systems(
            Update,
            (systems::process_commands, systems::handle_load_level).chain(),
        );

        // ====================================================================
        // Pointer interaction
        // ====================================================================
        app.add_systems(
            Update,
            (
                systems::follow_pointer_with_avatar,
                systems::pick_on_press,
                systems::drag_password_blocks,
                systems::activate_clicked_objects,
            )
                .chain()
                .after(systems::handle_load_level),
        );

        // WASM exit system
        #[cfg(all(target_arch = "wasm32", feature = "windowed"))]
        app.add_systems(Update, crate::bevy::wasm_entry::check_exit_system);

        // State sync
        app.add_systems(PostUpdate, systems::sync_session_to_stores);
    }
}

// ============================================================================
// Unified Plugin (headless + rendering)
// ============================================================================

/// Unified plugin for the browser build.
///
/// Includes `ExplorerHeadlessPlugin` for all scene logic, plus systems
/// that require `Window`, `Camera3d`, `Gizmos`, meshes and UI text.
#[derive(Default)]
pub struct ExplorerUnifiedPlugin {
    pub config: ExplorerConfig,
    pub command_queue: Option<CommandQueue>,
    pub state_stores: Option<StateStores>,
}

impl ExplorerUnifiedPlugin {
    pub fn new(
        config: ExplorerConfig,
        command_queue: CommandQueue,
        state_stores: StateStores,
    ) -> Self {
        Self {
            config,
            command_queue: Some(command_queue),
            state_stores: Some(state_stores),
        }
    }
}

impl Plugin for ExplorerUnifiedPlugin {
    fn build(&self, app: &mut App) {
        // ====================================================================
        // Headless logic
        // ====================================================================
        app.add_plugins(ExplorerHeadlessPlugin {
            config: self.config.clone(),
            command_queue: self.command_queue.clone(),
            state_stores: self.state_stores.clone(),
        });

        // ====================================================================
        // Camera, lights, label font
        // ====================================================================
        app.add_systems(
            Startup,
            (systems::setup_camera_and_lights, systems::load_label_font),
        );

        // ====================================================================
        // Input (needs Window/Camera)
        // ====================================================================
        app.add_systems(
            Update,
            systems::emit_pointer_rays.before(systems::follow_pointer_with_avatar),
        );

        // ====================================================================
        // Meshes and labels
        // ====================================================================
        app.add_systems(
            Update,
            (
                systems::draw_ground_grid,
                systems::attach_avatar_visual,
                systems::attach_clickable_visuals,
                systems::attach_password_visuals,
                systems::spawn_world_labels,
            )
                .after(systems::handle_load_level),
        );
        app.add_systems(
            Update,
            systems::cleanup_orphan_labels.after(systems::activate_clicked_objects),
        );
        app.add_systems(
            Update,
            systems::position_world_labels.after(systems::drag_password_blocks),
        );
    }
}
