//! World domain plugin for Hollowbrook.
//!
//! Owns the WorldState container. Player position is mirrored into it by
//! the player domain every frame; the farming surface below is reserved
//! but not yet implemented — each operation logs a warning and returns
//! nothing so callers written against the final API fail loudly instead
//! of silently.

use bevy::prelude::*;

use crate::shared::*;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WorldState>()
            // Listen for day rollovers in any state so we don't miss the event
            .add_systems(Update, log_new_day);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FARMING SURFACE — stubs until the crop/soil simulation lands
// ═══════════════════════════════════════════════════════════════════════

impl WorldState {
    /// Till the soil at a tile. Not implemented yet.
    pub fn till_soil(&mut self, x: i32, y: i32) -> Option<()> {
        warn!("[World] till_soil({}, {}) called but soil is not implemented yet", x, y);
        None
    }

    /// Plant a crop at a tile. Not implemented yet.
    pub fn add_crop(&mut self, x: i32, y: i32, crop_id: &str) -> Option<()> {
        warn!(
            "[World] add_crop({}, {}, {:?}) called but crops are not implemented yet",
            x, y, crop_id
        );
        None
    }

    /// Remove the crop at a tile, returning its id. Not implemented yet.
    pub fn remove_crop(&mut self, x: i32, y: i32) -> Option<String> {
        warn!("[World] remove_crop({}, {}) called but crops are not implemented yet", x, y);
        None
    }

    /// Look up the crop at a tile. Not implemented yet.
    pub fn crop_at(&self, x: i32, y: i32) -> Option<&String> {
        warn!("[World] crop_at({}, {}) called but crops are not implemented yet", x, y);
        None
    }
}

// ─── Day rollover logging ─────────────────────────────────────────────────────

/// Logs each day rollover. Daily world progression (crop growth, regrowth,
/// catch-up after load) will replace this listener.
fn log_new_day(mut day_reader: EventReader<NewDayEvent>, world_state: Res<WorldState>) {
    for event in day_reader.read() {
        info!(
            "[World] Day {} begins — player at grid ({}, {})",
            event.day, world_state.player_grid.x, world_state.player_grid.y
        );
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
