//! Clock domain — the heartbeat of Hollowbrook.
//!
//! Responsible for:
//! - Advancing simulated time from frame deltas (scaled by `time_scale`)
//! - Detecting day rollovers and sending NewDayEvent
//! - Pausing / unpausing time based on GameState
//!
//! There is deliberately no calendar structure yet (seasons, weekdays,
//! weather); progression systems will derive whatever they need from
//! `GameClock::total_seconds` when they land.

use bevy::prelude::*;

use crate::shared::*;

pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app
            // Pause time whenever we leave Playing state
            .add_systems(OnEnter(GameState::Playing), resume_clock)
            .add_systems(OnExit(GameState::Playing), pause_clock)
            // Core time tick — only runs while Playing and NOT paused
            .add_systems(
                Update,
                tick_clock
                    .run_if(in_state(GameState::Playing))
                    .run_if(clock_not_paused),
            );
    }
}

// ─── Run Conditions ───────────────────────────────────────────────────────────

fn clock_not_paused(clock: Res<GameClock>) -> bool {
    !clock.paused
}

// ─── State transition hooks ───────────────────────────────────────────────────

fn resume_clock(mut clock: ResMut<GameClock>) {
    clock.paused = false;
    info!("[Clock] Time resumed — {}", clock.format_stamp());
}

fn pause_clock(mut clock: ResMut<GameClock>) {
    clock.paused = true;
    info!("[Clock] Time paused — {}", clock.format_stamp());
}

// ─── Main time-tick system ────────────────────────────────────────────────────

/// Advances the clock by the frame delta scaled by `time_scale`, and emits
/// one NewDayEvent per day boundary crossed.
///
/// A single frame can cross several boundaries at a high time scale; every
/// skipped day still gets its event so daily progression never misses one.
fn tick_clock(
    time: Res<Time>,
    mut clock: ResMut<GameClock>,
    mut day_writer: EventWriter<NewDayEvent>,
) {
    let day_before = clock.day();
    clock.advance(time.delta_secs());

    let day_after = clock.day();
    for day in (day_before + 1)..=day_after {
        info!("[Clock] New day: {} ({})", day, clock.format_clock());
        day_writer.send(NewDayEvent { day });
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
