//! Shared state stores for Bevy-Yew communication.
//!
//! Each store holds a specific slice of state that can be polled
//! independently by Yew hooks, minimizing unnecessary re-renders.

use std::collections::VecDeque;
use std::sync::Arc;

use bevy::prelude::Resource;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Maximum number of undelivered notices to keep.
const MAX_PENDING_NOTICES: usize = 32;

// ============================================================================
// Data Types
// ============================================================================

/// Session state summary for the page chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionSummary {
    pub score: u32,
    pub score_visible: bool,
    pub start_button_visible: bool,
    /// CSS colour of the start button.
    pub start_button_color: String,
    pub modal_visible: bool,
    /// Text of the `#current-level` badge.
    pub level_label: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// 1-based number of the highlighted sidebar link.
    pub active_link: Option<u8>,
}

impl From<&Session> for SessionSummary {
    fn from(session: &Session) -> Self {
        Self {
            score: session.score,
            score_visible: session.score_visible,
            start_button_visible: session.start_button_visible,
            start_button_color: session.start_button_color.css().to_string(),
            modal_visible: session.modal_visible,
            level_label: session.level_label(),
            title: session.title().map(str::to_string),
            description: session.description().map(str::to_string),
            active_link: session.active_link.map(crate::level::Level::number),
        }
    }
}

/// One-shot UI side effect for the DOM layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Notice {
    /// Blocking `window.alert` message.
    Alert(String),
    /// URL to open in a new tab.
    OpenUrl(String),
}

// ============================================================================
// Individual Stores
// ============================================================================

/// Store for the session summary.
#[derive(Debug, Default)]
pub struct SessionStore {
    summary: RwLock<SessionSummary>,
    version: RwLock<u64>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_summary(&self) -> SessionSummary {
        self.summary.read().clone()
    }

    pub fn get_version(&self) -> u64 {
        *self.version.read()
    }

    pub fn update(&self, summary: SessionSummary) {
        *self.summary.write() = summary;
        *self.version.write() += 1;
    }
}

/// Queue of notices waiting to be shown by the frontend.
#[derive(Debug, Default)]
pub struct NoticeStore {
    pending: RwLock<VecDeque<Notice>>,
    version: RwLock<u64>,
}

impl NoticeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, notice: Notice) {
        let mut pending = self.pending.write();
        pending.push_back(notice);
        while pending.len() > MAX_PENDING_NOTICES {
            pending.pop_front();
        }
        *self.version.write() += 1;
    }

    /// Removes and returns all pending notices in arrival order.
    pub fn take(&self) -> Vec<Notice> {
        self.pending.write().drain(..).collect()
    }

    pub fn get_version(&self) -> u64 {
        *self.version.read()
    }

    pub fn clear(&self) {
        self.pending.write().clear();
    }
}

// ============================================================================
// Combined State Stores
// ============================================================================

/// All state stores combined for easy sharing.
#[derive(Debug, Clone, Resource)]
pub struct StateStores {
    pub session: Arc<SessionStore>,
    pub notices: Arc<NoticeStore>,
}

impl StateStores {
    pub fn new() -> Self {
        Self {
            session: Arc::new(SessionStore::new()),
            notices: Arc::new(NoticeStore::new()),
        }
    }
}

impl Default for StateStores {
    fn default() -> Self {
        Self::new()
    }
}
