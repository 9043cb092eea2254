//! Shared components, resources, events, and states for Hollowbrook.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Playing,
    Paused,
}

// ═══════════════════════════════════════════════════════════════════════
// GAME CLOCK
// ═══════════════════════════════════════════════════════════════════════

/// Simulated game time, decoupled from the wall clock.
///
/// `total_seconds` only ever grows, and only through [`GameClock::advance`]
/// fed by frame deltas — never by reading system time. That keeps saves
/// immune to clock tampering and lets future progression code compute
/// catch-up from a single trusted counter.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct GameClock {
    /// Total simulated seconds since the start of day 1.
    pub total_seconds: f64,
    /// Game-seconds per real-second. Clamped to `0.0..=MAX_TIME_SCALE`.
    pub time_scale: f32,
    /// Freezes the clock without leaving the Playing state
    /// (cutscenes, dialogue — systems that pause time but not the world).
    pub paused: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            total_seconds: 0.0,
            time_scale: 1.0,
            paused: false,
        }
    }
}

impl GameClock {
    /// Current in-game day, 1-based. Day 5 begins at exactly 345 600 s.
    pub fn day(&self) -> u32 {
        (self.total_seconds / SECONDS_PER_DAY) as u32 + 1
    }

    /// Seconds elapsed since the current day began.
    pub fn time_of_day_seconds(&self) -> f64 {
        self.total_seconds % SECONDS_PER_DAY
    }

    /// Clock reading as (hours, minutes, seconds) within the current day.
    pub fn clock_time(&self) -> (u32, u32, u32) {
        let secs = self.time_of_day_seconds() as u64;
        (
            (secs / 3600) as u32,
            (secs % 3600 / 60) as u32,
            (secs % 60) as u32,
        )
    }

    /// `"HH:MM:SS"` within the current day.
    pub fn format_clock(&self) -> String {
        let (h, m, s) = self.clock_time();
        format!("{:02}:{:02}:{:02}", h, m, s)
    }

    /// `"Day N, HH:MM:SS"` — the full timestamp used in logs.
    pub fn format_stamp(&self) -> String {
        format!("Day {}, {}", self.day(), self.format_clock())
    }

    /// Sets the time scale, clamped to `0.0..=MAX_TIME_SCALE`.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
    }

    /// Advances the clock by `delta` real seconds, scaled by `time_scale`.
    /// Does nothing while the pause flag is set.
    pub fn advance(&mut self, delta: f32) {
        if self.paused {
            return;
        }
        self.total_seconds += delta.max(0.0) as f64 * self.time_scale as f64;
    }
}

// ═══════════════════════════════════════════════════════════════════════
// WORLD STATE
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilState {
    Untilled,
    Tilled,
    Watered,
}

/// Central world-state container. The player systems mirror position into
/// it every frame; the farming maps are reserved for the crop and soil
/// simulation, whose operations are still stubs (see `world`).
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldState {
    /// Player tile coordinate, kept in sync with the transform.
    pub player_grid: GridPosition,
    /// Player world position (x, y), kept in sync with the transform.
    pub player_world: (f32, f32),
    /// Tilled/watered tiles. Key = (x, y). Unpopulated until tilling lands.
    pub soil: HashMap<(i32, i32), SoilState>,
    /// Planted crops by tile. Key = (x, y). Unpopulated until planting lands.
    pub crops: HashMap<(i32, i32), String>,
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

#[derive(Component, Debug, Clone, Default)]
pub struct Player;

#[derive(Component, Debug, Clone)]
pub struct PlayerMovement {
    pub facing: Facing,
    pub is_moving: bool,
    pub speed: f32,
}

impl Default for PlayerMovement {
    fn default() -> Self {
        Self {
            facing: Facing::Down,
            is_moving: false,
            speed: PLAYER_SPEED,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// GRID
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INPUT
// ═══════════════════════════════════════════════════════════════════════

/// Per-frame game actions derived from hardware input. Reset and rebuilt
/// by the input domain at the top of every frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerInput {
    /// Normalized movement direction (zero when no key is held).
    pub move_axis: Vec2,
    /// Pause toggle edge (just pressed this frame).
    pub pause: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub move_up: KeyCode,
    pub move_down: KeyCode,
    pub move_left: KeyCode,
    pub move_right: KeyCode,
    pub pause: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_up: KeyCode::KeyW,
            move_down: KeyCode::KeyS,
            move_left: KeyCode::KeyA,
            move_right: KeyCode::KeyD,
            pause: KeyCode::Escape,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

/// Sent by the clock when `total_seconds` crosses a day boundary.
/// Daily progression (crop growth, catch-up) will attach here.
#[derive(Event, Debug, Clone)]
pub struct NewDayEvent {
    /// The day that just began (1-based).
    pub day: u32,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const TILE_SIZE: f32 = 16.0;
pub const PIXEL_SCALE: f32 = 3.0; // render scale (16px × 3 = 48px on screen)
pub const SCREEN_WIDTH: f32 = 960.0;
pub const SCREEN_HEIGHT: f32 = 540.0;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const MAX_TIME_SCALE: f32 = 100.0;

pub const PLAYER_SPEED: f32 = 80.0; // world px/s
