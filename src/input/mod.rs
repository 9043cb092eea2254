//! Input domain — the single point where hardware input becomes game
//! actions. Runs in PreUpdate so every gameplay system sees this frame's
//! PlayerInput.

use bevy::prelude::*;

use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreUpdate, (reset_and_read_input, toggle_pause).chain());
    }
}

fn reset_and_read_input(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<PlayerInput>,
) {
    *input = PlayerInput::default();

    let mut axis = Vec2::ZERO;
    if keys.pressed(bindings.move_up) || keys.pressed(KeyCode::ArrowUp) {
        axis.y += 1.0;
    }
    if keys.pressed(bindings.move_down) || keys.pressed(KeyCode::ArrowDown) {
        axis.y -= 1.0;
    }
    if keys.pressed(bindings.move_left) || keys.pressed(KeyCode::ArrowLeft) {
        axis.x -= 1.0;
    }
    if keys.pressed(bindings.move_right) || keys.pressed(KeyCode::ArrowRight) {
        axis.x += 1.0;
    }
    // Normalise so diagonal speed equals cardinal speed.
    input.move_axis = if axis != Vec2::ZERO {
        axis.normalize()
    } else {
        Vec2::ZERO
    };

    input.pause = keys.just_pressed(bindings.pause);
}

/// Flips Playing ↔ Paused on the pause edge. The clock plugin reacts to
/// the state transition, so this is the only pause entry point.
fn toggle_pause(
    input: Res<PlayerInput>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !input.pause {
        return;
    }

    match state.get() {
        GameState::Playing => next_state.set(GameState::Paused),
        GameState::Paused => next_state.set(GameState::Playing),
    }
}
