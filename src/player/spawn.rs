use bevy::prelude::*;

use crate::grid::grid_to_world;
use crate::shared::*;

/// Spawns the player at the origin tile when entering Playing.
///
/// Placeholder visuals: a flat color quad one tile big. The character
/// spritesheet and walk animation come with the asset pass.
pub fn spawn_player(mut commands: Commands, existing: Query<Entity, With<Player>>) {
    // OnEnter(Playing) also fires on unpause; spawn only once.
    if !existing.is_empty() {
        return;
    }

    let start = grid_to_world(0, 0);

    commands.spawn((
        Player,
        PlayerMovement::default(),
        GridPosition::new(0, 0),
        Sprite::from_color(Color::srgb(0.85, 0.55, 0.35), Vec2::splat(TILE_SIZE)),
        Transform::from_xyz(start.x, start.y, 10.0),
    ));

    info!("[Player] Spawned at grid (0, 0)");
}
