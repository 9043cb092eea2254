use bevy::prelude::*;

use crate::grid::world_to_grid;
use crate::shared::*;

/// Core movement system — maps the input axis to a velocity, applies it,
/// updates facing, and keeps GridPosition and WorldState in sync.
///
/// Movement is continuous (smooth pixel motion at `speed` px/s) but the
/// `GridPosition` component is always kept in sync for tile lookups.
/// There is no collision yet; the snapshot has no collision map to test
/// against.
pub fn player_movement(
    time: Res<Time>,
    input: Res<PlayerInput>,
    mut world_state: ResMut<WorldState>,
    mut query: Query<(&mut Transform, &mut PlayerMovement, &mut GridPosition), With<Player>>,
) {
    let Ok((mut transform, mut movement, mut grid_pos)) = query.get_single_mut() else {
        return;
    };

    let axis = input.move_axis;
    if axis != Vec2::ZERO {
        movement.is_moving = true;

        if let Some(facing) = facing_from_axis(axis) {
            movement.facing = facing;
        }

        // Axis is already normalized by the input domain.
        let delta = axis * movement.speed * time.delta_secs();
        transform.translation.x += delta.x;
        transform.translation.y += delta.y;
    } else {
        movement.is_moving = false;
    }

    // Grid position follows the world position, then both are mirrored
    // into WorldState for systems that don't query the player entity.
    let (gx, gy) = world_to_grid(transform.translation.x, transform.translation.y);
    grid_pos.x = gx;
    grid_pos.y = gy;
    world_state.player_grid = *grid_pos;
    world_state.player_world = (transform.translation.x, transform.translation.y);
}

/// Facing direction for a movement axis, or None for a zero axis.
///
/// Vertical wins on exact diagonals — feels more natural for a top-down
/// farming game (approaching plots).
pub fn facing_from_axis(axis: Vec2) -> Option<Facing> {
    if axis == Vec2::ZERO {
        return None;
    }
    if axis.y.abs() >= axis.x.abs() {
        Some(if axis.y > 0.0 { Facing::Up } else { Facing::Down })
    } else {
        Some(if axis.x > 0.0 { Facing::Right } else { Facing::Left })
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
