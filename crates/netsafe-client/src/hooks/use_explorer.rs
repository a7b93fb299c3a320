//! Bevy integration hooks for Yew.
//!
//! `ExplorerProvider` starts the scene and shares a command context.
//! The polling hooks read the core's state stores and re-render only when
//! the store version moves.

use gloo::timers::callback::{Interval, Timeout};
use netsafe_core::Session;
use netsafe_core::bevy::{Notice, SessionSummary};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

pub use netsafe_core::bevy::{
    get_notices_version, get_session, get_session_version, is_explorer_ready,
    request_explorer_exit, reset_explorer_state, send_command, start_explorer_app, take_notices,
};

/// Polling interval in milliseconds.
const POLL_INTERVAL_MS: u32 = 50;

/// Delay before starting Bevy so the canvas is mounted.
const START_DELAY_MS: u32 = 100;

// ============================================================================
// Context
// ============================================================================

/// Explorer context for sending session commands from components.
#[derive(Clone, PartialEq)]
pub struct ExplorerContext {
    /// Whether the Bevy app has been started.
    pub initialized: bool,
}

impl ExplorerContext {
    /// Send a JSON command to Bevy.
    pub fn send_command(&self, command: &str) -> Result<(), String> {
        if !self.initialized {
            return Err("Explorer not initialized".to_string());
        }
        send_command(command).map_err(|e| format!("{e:?}"))
    }

    pub fn start_exploration(&self) -> Result<(), String> {
        self.send_command(r#"{"type":"start_exploration"}"#)
    }

    pub fn close_modal(&self) -> Result<(), String> {
        self.send_command(r#"{"type":"close_modal"}"#)
    }

    pub fn select_level(&self, level: i64) -> Result<(), String> {
        let cmd = serde_json::json!({
            "type": "select_level",
            "level": level,
        });
        self.send_command(&cmd.to_string())
    }
}

/// Props for `ExplorerProvider`.
#[derive(Properties, PartialEq)]
pub struct ExplorerProviderProps {
    pub children: Children,
    /// Canvas element ID.
    pub canvas_id: AttrValue,
    /// `ExplorerConfig` JSON.
    #[prop_or(AttrValue::Static("{}"))]
    pub config_json: AttrValue,
}

/// Provider component that starts the Bevy app on the scene canvas.
#[function_component(ExplorerProvider)]
pub fn explorer_provider(props: &ExplorerProviderProps) -> Html {
    let initialized = use_state(|| false);

    {
        let initialized = initialized.clone();
        let canvas_id = props.canvas_id.to_string();
        let config_json = props.config_json.to_string();

        use_effect_with((), move |_| {
            let window = web_sys::window();

            // Cleanup Bevy state on page reload
            let beforeunload = Closure::<dyn Fn()>::new(move || {
                tracing::info!("beforeunload: requesting explorer exit and cleaning up state");
                request_explorer_exit();
                reset_explorer_state();
            });
            if let Some(window) = &window {
                if let Err(e) = window.add_event_listener_with_callback(
                    "beforeunload",
                    beforeunload.as_ref().unchecked_ref(),
                ) {
                    tracing::warn!("failed to add beforeunload listener: {:?}", e);
                }
            }

            let timeout = Timeout::new(START_DELAY_MS, move || {
                initialized.set(true);
                tracing::info!("Explorer initializing...");

                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = start_explorer_app(&canvas_id, &config_json) {
                        tracing::error!("Failed to start explorer: {:?}", e);
                    }
                });
            });

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback(
                        "beforeunload",
                        beforeunload.as_ref().unchecked_ref(),
                    );
                }
                drop(timeout);
            }
        });
    }

    let context = ExplorerContext {
        initialized: *initialized,
    };

    html! {
        <ContextProvider<ExplorerContext> context={context}>
            { props.children.clone() }
        </ContextProvider<ExplorerContext>>
    }
}

/// Hook to get the explorer context.
#[hook]
pub fn use_explorer() -> ExplorerContext {
    use_context::<ExplorerContext>().unwrap_or(ExplorerContext { initialized: false })
}

// ============================================================================
// Polling Hooks
// ============================================================================

/// Hook to get the session summary.
///
/// Starts from a fresh session so the start button shows before Bevy runs.
#[hook]
pub fn use_session() -> SessionSummary {
    let summary = use_state(|| SessionSummary::from(&Session::default()));
    let last_version = use_mut_ref(|| 0u64);

    {
        let summary = summary.clone();
        let last_version = last_version.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(POLL_INTERVAL_MS, move || {
                if !is_explorer_ready() {
                    return;
                }
                let version = get_session_version();
                if version != *last_version.borrow() {
                    *last_version.borrow_mut() = version;
                    let js_value = get_session();
                    if let Ok(next) = serde_wasm_bindgen::from_value::<SessionSummary>(js_value) {
                        summary.set(next);
                    }
                }
            });

            move || drop(interval)
        });
    }

    (*summary).clone()
}

fn show_notice(notice: &Notice) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match notice {
        Notice::Alert(message) => {
            let _ = window.alert_with_message(message);
        }
        Notice::OpenUrl(url) => {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                tracing::warn!("failed to open {}: {:?}", url, e);
            }
        }
    }
}

/// Hook that shows pending notices as alerts and new tabs.
#[hook]
pub fn use_notices() {
    let last_version = use_mut_ref(|| 0u64);

    use_effect_with((), move |_| {
        let interval = Interval::new(POLL_INTERVAL_MS, move || {
            if !is_explorer_ready() {
                return;
            }
            let version = get_notices_version();
            if version == *last_version.borrow() {
                return;
            }
            *last_version.borrow_mut() = version;

            let js_value = take_notices();
            if let Ok(notices) = serde_wasm_bindgen::from_value::<Vec<Notice>>(js_value) {
                notices.iter().for_each(show_notice);
            }
        });

        move || drop(interval)
    });
}
