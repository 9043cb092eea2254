//! Grid coordinate math for Hollowbrook.
//!
//! Pure conversions between continuous world space and the discrete tile
//! grid. No plugin — every domain calls these directly.

use bevy::prelude::*;

use crate::shared::*;

/// Converts a world position to the tile coordinate containing it.
///
/// Floor division, so positions just left/below the origin land in tile
/// (-1, -1) rather than (0, 0).
pub fn world_to_grid(wx: f32, wy: f32) -> (i32, i32) {
    (
        (wx / TILE_SIZE).floor() as i32,
        (wy / TILE_SIZE).floor() as i32,
    )
}

/// World position of the CENTER of a tile. Entities standing "on" a tile
/// sit here.
pub fn grid_to_world(x: i32, y: i32) -> Vec2 {
    Vec2::new(
        x as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        y as f32 * TILE_SIZE + TILE_SIZE / 2.0,
    )
}

/// World position of the bottom-left corner of a tile. Tile sprites anchor
/// here.
pub fn grid_to_world_corner(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32 * TILE_SIZE, y as f32 * TILE_SIZE)
}

/// Get the facing-direction offset as a grid delta.
pub fn facing_offset(facing: Facing) -> (i32, i32) {
    match facing {
        Facing::Up => (0, 1),
        Facing::Down => (0, -1),
        Facing::Left => (-1, 0),
        Facing::Right => (1, 0),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
