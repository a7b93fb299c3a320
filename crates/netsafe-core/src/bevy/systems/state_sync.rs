//! State synchronization systems.
//!
//! Syncs Bevy ECS state to `StateStores` for Yew UI access.

use bevy::prelude::*;

use crate::bevy::{ExplorationSession, SessionSummary, StateStores};

/// System to sync the session summary to the state stores.
///
/// Only publishes when the session resource changed, so the store version
/// moves once per visible change.
pub fn sync_session_to_stores(session: Res<ExplorationSession>, state_stores: Res<StateStores>) {
    if !session.is_changed() {
        return;
    }
    state_stores.session.update(SessionSummary::from(&session.0));
}
