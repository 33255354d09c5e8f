//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub jump_take_off_speed: f32,
    /// When false, air jumps are disabled regardless of `max_air_jumps`
    pub enable_more_jumps: bool,
    /// Maximum air jumps (0 = no double jump, 1 = double jump, 2 = triple, etc.)
    pub max_air_jumps: u8,
    pub enable_wall_jump: bool,
    /// Seconds after a wall jump during which input toward the wall is reversed
    pub wall_jump_time: f32,
    pub enable_dash: bool,
    pub dash_speed: f32,
    pub dash_time: f32,
    /// Minimum time between dash starts
    pub dash_cool_down: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 336.0,
            jump_take_off_speed: 620.0,
            enable_more_jumps: true,
            max_air_jumps: 2,
            enable_wall_jump: true,
            wall_jump_time: 0.5,
            enable_dash: true,
            dash_speed: 900.0,
            dash_time: 0.5,
            dash_cool_down: 1.0,
        }
    }
}

impl MovementTuning {
    /// Air jump budget after applying the `enable_more_jumps` switch.
    pub fn air_jump_budget(&self) -> u8 {
        if self.enable_more_jumps {
            self.max_air_jumps
        } else {
            0
        }
    }

    /// Upward impulse applied when the player is hurt.
    pub fn recovery_impulse(&self) -> f32 {
        self.jump_take_off_speed / 3.0
    }
}

/// Per-tick view of the player's controls.
///
/// Axes and held buttons are overwritten every frame. Edges (`*_pressed`,
/// `*_released`) are latched until a fixed tick consumes them with
/// [`InputSnapshot::clear_edges`].
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub horizontal: f32,
    pub vertical: f32,
    pub aim_up: bool,
    pub aim_down: bool,
    pub fire_held: bool,
    pub jump_pressed: bool,
    pub jump_released: bool,
    pub dash_pressed: bool,
}

impl InputSnapshot {
    pub fn clear_edges(&mut self) {
        self.jump_pressed = false;
        self.jump_released = false;
        self.dash_pressed = false;
    }

    /// Horizontal axis clamped to [-1, 1], with non-finite values read as 0.
    pub fn horizontal_axis(&self) -> f32 {
        sanitize_axis(self.horizontal)
    }

    /// Vertical axis clamped to [-1, 1], with non-finite values read as 0.
    pub fn vertical_axis(&self) -> f32 {
        sanitize_axis(self.vertical)
    }
}

fn sanitize_axis(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
