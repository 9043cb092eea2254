use bevy::prelude::*;

use crate::shared::*;

/// Keeps the camera centered on the player. Hard lock for now; smoothing
/// and map-edge clamping wait until there are maps to clamp against.
pub fn camera_follow_player(
    player: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player_transform) = player.get_single() else {
        return;
    };
    let Ok(mut camera_transform) = camera.get_single_mut() else {
        return;
    };

    camera_transform.translation.x = player_transform.translation.x;
    camera_transform.translation.y = player_transform.translation.y;
}
