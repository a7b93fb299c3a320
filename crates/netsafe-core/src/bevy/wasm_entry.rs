//! WASM entry points for the explorer.
//!
//! Provides JavaScript-callable functions to start the scene, drive the
//! session and poll the shared stores.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::winit::{UpdateMode, WinitSettings};
use wasm_bindgen::prelude::*;

use crate::bevy::{CommandQueue, ExplorerUnifiedPlugin, GameCommand, StateStores};
use crate::config::ExplorerConfig;

// ============================================================================
// Global State
// ============================================================================

/// Atomic flag for signaling app shutdown (checked every frame by Bevy system).
static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);

/// Atomic flag indicating whether the Bevy App has been started.
/// In WASM, the EventLoop can only be created once, so a second start is a no-op.
static BEVY_APP_STARTED: AtomicBool = AtomicBool::new(false);

/// Global state that can be reset on page reload.
struct GlobalState {
    command_queue: CommandQueue,
    state_stores: StateStores,
}

impl GlobalState {
    fn new() -> Self {
        Self {
            command_queue: CommandQueue::new(),
            state_stores: StateStores::new(),
        }
    }
}

static GLOBAL_STATE: Mutex<Option<GlobalState>> = Mutex::new(None);

fn lock_global_state() -> MutexGuard<'static, Option<GlobalState>> {
    GLOBAL_STATE.lock().unwrap_or_else(PoisonError::into_inner)
}

fn with_global_state<R>(f: impl FnOnce(&GlobalState) -> R) -> R {
    let mut guard = lock_global_state();
    f(guard.get_or_insert_with(GlobalState::new))
}

fn get_command_queue() -> CommandQueue {
    with_global_state(|state| state.command_queue.clone())
}

fn get_state_stores() -> StateStores {
    with_global_state(|state| state.state_stores.clone())
}

fn is_shutdown_requested() -> bool {
    SHOULD_EXIT.load(Ordering::SeqCst)
}

/// Request Bevy app to exit. Called before page unload.
/// The app will exit on the next frame when the exit system runs.
#[wasm_bindgen]
pub fn request_explorer_exit() {
    tracing::info!("[explorer] request_explorer_exit called - signaling app to exit");
    SHOULD_EXIT.store(true, Ordering::SeqCst);
}

/// Reset global state. Called after app exits or before page unload.
#[wasm_bindgen]
pub fn reset_explorer_state() {
    tracing::info!("[explorer] reset_explorer_state called - clearing global state");

    SHOULD_EXIT.store(true, Ordering::SeqCst);

    let mut guard = lock_global_state();
    if let Some(state) = guard.as_ref() {
        state.command_queue.clear();
        state.state_stores.notices.clear();
    }
    *guard = None;

    SHOULD_EXIT.store(false, Ordering::SeqCst);
}

/// Bevy system that checks if exit was requested and sends `AppExit`.
pub fn check_exit_system(mut exit: MessageWriter<bevy::app::AppExit>) {
    if SHOULD_EXIT.load(Ordering::SeqCst) {
        tracing::info!("[explorer] check_exit_system: sending AppExit");
        exit.write(bevy::app::AppExit::Success);
    }
}

// ============================================================================
// Initialization
// ============================================================================

/// Starts the Bevy app on the given canvas.
///
/// `config_json` is an `ExplorerConfig`; `{}` uses the defaults.
#[wasm_bindgen]
pub fn start_explorer_app(canvas_id: &str, config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    tracing::info!("[explorer] start_explorer_app called");

    if BEVY_APP_STARTED.load(Ordering::SeqCst) {
        tracing::info!("[explorer] App already running, skipping creation");
        return Ok(());
    }

    let config = ExplorerConfig::from_json(config_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid explorer config: {e}")))?;

    let command_queue = get_command_queue();
    let state_stores = get_state_stores();

    tracing::info!(
        "[explorer] creating Bevy app for canvas: #{} (assets: {})",
        canvas_id,
        config.asset_root
    );

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    canvas: Some(format!("#{canvas_id}")),
                    fit_canvas_to_parent: true,
                    prevent_default_event_handling: true,
                    ..default()
                }),
                ..default()
            })
            .set(AssetPlugin {
                file_path: config.asset_root.clone(),
                ..default()
            })
            .disable::<bevy::log::LogPlugin>(),
    );

    app.insert_resource(WinitSettings {
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::Continuous,
    });

    app.add_plugins(ExplorerUnifiedPlugin::new(
        config,
        command_queue,
        state_stores,
    ));

    BEVY_APP_STARTED.store(true, Ordering::SeqCst);

    tracing::info!("[explorer] calling app.run()");
    app.run();
    tracing::info!("[explorer] app.run() returned");

    Ok(())
}

/// Check if the command queue and stores are available.
#[wasm_bindgen]
pub fn is_explorer_ready() -> bool {
    let guard = lock_global_state();
    guard.is_some() && !is_shutdown_requested()
}

/// Check if the Bevy app has been started and is not shutting down.
#[wasm_bindgen]
pub fn is_explorer_running() -> bool {
    BEVY_APP_STARTED.load(Ordering::SeqCst) && !is_shutdown_requested()
}

// ============================================================================
// Commands
// ============================================================================

fn push_command(command: GameCommand) -> Result<(), JsValue> {
    if is_shutdown_requested() {
        return Err(JsValue::from_str("Bevy app is shutting down"));
    }
    get_command_queue().push(command);
    Ok(())
}

/// Send a JSON command to the Bevy app.
///
/// Format: `{"type": "select_level", "level": 2}`
#[wasm_bindgen]
pub fn send_command(command_json: &str) -> Result<(), JsValue> {
    let value: serde_json::Value = serde_json::from_str(command_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid command JSON: {e}")))?;

    let command_type = value["type"]
        .as_str()
        .ok_or_else(|| JsValue::from_str("Missing 'type' field"))?;

    let command = match command_type {
        "start_exploration" => GameCommand::StartExploration,
        "close_modal" => GameCommand::CloseModal,
        "select_level" => {
            let level = value["level"]
                .as_f64()
                .ok_or_else(|| JsValue::from_str("Missing 'level' field"))?;
            GameCommand::select_level(level)
        }
        "yield" => GameCommand::Yield,
        other => {
            return Err(JsValue::from_str(&format!("Unknown command type: {other}")));
        }
    };

    push_command(command)
}

/// Enter level one. Exposed to the page as `startExploration()`.
#[wasm_bindgen(js_name = startExploration)]
pub fn start_exploration() -> Result<(), JsValue> {
    push_command(GameCommand::StartExploration)
}

/// Hide the introduction modal. Exposed to the page as `closeModal()`.
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() -> Result<(), JsValue> {
    push_command(GameCommand::CloseModal)
}

/// Select a level by number. Exposed to the page as `selectLevel(level)`.
///
/// Out-of-range or fractional numbers raise the invalid-level alert.
#[wasm_bindgen(js_name = selectLevel)]
pub fn select_level(level: f64) -> Result<(), JsValue> {
    push_command(GameCommand::select_level(level))
}

// ============================================================================
// Store getters
// ============================================================================

#[wasm_bindgen]
pub fn get_session() -> JsValue {
    let summary = get_state_stores().session.get_summary();
    serde_wasm_bindgen::to_value(&summary).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub fn get_session_version() -> u64 {
    get_state_stores().session.get_version()
}

/// Drain pending notices (alerts and URLs to open).
#[wasm_bindgen]
pub fn take_notices() -> JsValue {
    let notices = get_state_stores().notices.take();
    serde_wasm_bindgen::to_value(&notices).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub fn get_notices_version() -> u64 {
    get_state_stores().notices.get_version()
}
