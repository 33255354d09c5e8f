//! Aim domain: 8-way facing resolution and crosshair placement.

use std::f32::consts::SQRT_2;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Horizontal input magnitude that counts as "moving" when aiming up.
const MOVE_THRESHOLD: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Facing {
    #[default]
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Facing {
    pub const ALL: [Facing; 8] = [
        Facing::Right,
        Facing::UpRight,
        Facing::Up,
        Facing::UpLeft,
        Facing::Left,
        Facing::DownLeft,
        Facing::Down,
        Facing::DownRight,
    ];

    /// +1 for the right family, -1 for the left family, None for up/down.
    pub fn horizontal_sign(self) -> Option<f32> {
        match self {
            Facing::Right | Facing::UpRight | Facing::DownRight => Some(1.0),
            Facing::Left | Facing::UpLeft | Facing::DownLeft => Some(-1.0),
            Facing::Up | Facing::Down => None,
        }
    }

    /// Sprite mirror flag implied by this facing, None when it keeps the last one.
    pub fn mirror(self) -> Option<bool> {
        self.horizontal_sign().map(|sign| sign < 0.0)
    }

    /// Crosshair rotation in degrees, 45° steps counter-clockwise from right.
    pub fn rotation_degrees(self) -> f32 {
        match self {
            Facing::Right => 0.0,
            Facing::UpRight => 45.0,
            Facing::Up => 90.0,
            Facing::UpLeft => 135.0,
            Facing::Left => 180.0,
            Facing::DownLeft => -135.0,
            Facing::Down => -90.0,
            Facing::DownRight => -45.0,
        }
    }

    /// Animation direction index: 0 side, 1 up, 2 up-diagonal, 3 down-diagonal, 4 down.
    pub fn animation_direction(self) -> u8 {
        match self {
            Facing::Right | Facing::Left => 0,
            Facing::Up => 1,
            Facing::UpRight | Facing::UpLeft => 2,
            Facing::DownRight | Facing::DownLeft => 3,
            Facing::Down => 4,
        }
    }

    /// Unit-length crosshair offset multiplier before scaling by spawn distance.
    fn unit_offset(self) -> Vec2 {
        let diag = 1.0 / SQRT_2;
        match self {
            Facing::Right => Vec2::new(1.0, 0.0),
            Facing::UpRight => Vec2::new(diag, diag),
            Facing::Up => Vec2::new(0.0, 1.0),
            Facing::UpLeft => Vec2::new(-diag, diag),
            Facing::Left => Vec2::new(-1.0, 0.0),
            Facing::DownLeft => Vec2::new(-diag, -diag),
            Facing::Down => Vec2::new(0.0, -1.0),
            Facing::DownRight => Vec2::new(diag, -diag),
        }
    }
}

/// Aim state carried between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AimContext {
    pub facing: Facing,
    pub crouching: bool,
    /// Sprite is mirrored to face left; remembered through up/down facings
    pub mirrored: bool,
}

/// Inputs for one aim resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AimInput {
    /// Horizontal movement after wall-jump reversal
    pub move_x: f32,
    pub vertical: f32,
    pub aim_up: bool,
    pub aim_down: bool,
    pub grounded: bool,
    pub wall_sliding: bool,
}

/// Resolve the next facing and crouch flag. First matching rule wins.
pub fn resolve_aim(input: &AimInput, previous: AimContext) -> AimContext {
    let mut facing = previous.facing;
    let mut crouching = false;

    if input.vertical > 0.0 {
        facing = if input.move_x > MOVE_THRESHOLD {
            Facing::UpRight
        } else if input.move_x < -MOVE_THRESHOLD {
            Facing::UpLeft
        } else {
            Facing::Up
        };
    } else if input.vertical < 0.0 {
        if input.grounded {
            crouching = true;
        } else {
            facing = Facing::Down;
        }
    } else if input.aim_up {
        // Aim buttons only tilt a plain horizontal facing
        facing = match facing {
            Facing::Right => Facing::UpRight,
            Facing::Left => Facing::UpLeft,
            other => other,
        };
    } else if input.aim_down {
        facing = match facing {
            Facing::Right => Facing::DownRight,
            Facing::Left => Facing::DownLeft,
            other => other,
        };
    } else if input.move_x > 0.0 {
        // Pinned against a wall, the sprite looks away from it
        facing = if input.wall_sliding {
            Facing::Left
        } else {
            Facing::Right
        };
    } else if input.move_x < 0.0 {
        facing = if input.wall_sliding {
            Facing::Right
        } else {
            Facing::Left
        };
    } else {
        facing = match facing {
            Facing::UpRight | Facing::DownRight => Facing::Right,
            Facing::UpLeft | Facing::DownLeft => Facing::Left,
            Facing::Up | Facing::Down if previous.mirrored => Facing::Left,
            Facing::Up | Facing::Down => Facing::Right,
            other => other,
        };
    }

    AimContext {
        facing,
        crouching,
        mirrored: facing.mirror().unwrap_or(previous.mirrored),
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AimTuning {
    /// Distance from the player centre to the crosshair
    pub shot_spawn_distance: f32,
    /// How far the crosshair drops while crouching
    pub crouch_shot: f32,
}

impl Default for AimTuning {
    fn default() -> Self {
        Self {
            shot_spawn_distance: 32.0,
            crouch_shot: 12.0,
        }
    }
}

/// Local crosshair transform derived from the facing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CrosshairPlacement {
    pub offset: Vec2,
    pub rotation_degrees: f32,
    pub mirrored: bool,
}

pub fn crosshair_placement(aim: &AimContext, tuning: &AimTuning) -> CrosshairPlacement {
    let mut offset = aim.facing.unit_offset() * tuning.shot_spawn_distance;
    if aim.crouching {
        offset.y -= tuning.crouch_shot;
    }

    CrosshairPlacement {
        offset,
        rotation_degrees: aim.facing.rotation_degrees(),
        mirrored: aim.mirrored,
    }
}
