//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::InputSnapshot;

/// Sample the keyboard once per render frame.
///
/// Edges are OR-ed into the snapshot so that a press is never lost when a
/// frame runs zero fixed ticks.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<InputSnapshot>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (aim up, crouch, aim down in the air)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.horizontal = x;
    input.vertical = y;
    input.aim_up = keyboard.pressed(KeyCode::KeyI);
    input.aim_down = keyboard.pressed(KeyCode::KeyO);
    input.fire_held = keyboard.pressed(KeyCode::KeyZ) || keyboard.pressed(KeyCode::KeyL);

    input.jump_pressed |=
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.jump_released |=
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK);
    input.dash_pressed |=
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ);
}

/// Forget edges latched while gameplay was paused.
pub(crate) fn reset_input(mut input: ResMut<InputSnapshot>) {
    *input = InputSnapshot::default();
}
