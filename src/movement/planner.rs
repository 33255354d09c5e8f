//! Movement domain: horizontal movement and the jump policy.

use bevy::prelude::*;

use crate::movement::{InputSnapshot, MovementState, MovementTuning, WallContact, WallJumpLock};

/// Which jump rule fired on a jump press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpKind {
    Ground,
    Wall { pushed_left: bool },
    /// `count` is the number of air jumps used including this one
    Air { count: u8 },
}

/// Result of planning one normal-movement tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionPlan {
    /// Horizontal input after wall-jump reversal, in [-1, 1]
    pub move_x: f32,
    pub jump: Option<JumpKind>,
    /// The jump was released this tick and upward speed was cut
    pub jump_cut: bool,
}

/// Apply the wall-jump lock to a raw horizontal axis value.
///
/// While the lock holds, input pointing back toward the wall is inverted.
pub fn resolve_horizontal_input(raw: f32, lock: &WallJumpLock, now: f32) -> f32 {
    if lock.is_active(now) && (raw > 0.0) == lock.reversed_direction_is_left {
        -raw
    } else {
        raw
    }
}

/// Plan normal movement for one tick.
///
/// Writes `state.target_velocity` and `state.touching_wall`, and mutates the
/// vertical component of `velocity` on jump and jump-release.
pub fn plan_motion(
    input: &InputSnapshot,
    state: &mut MovementState,
    lock: &mut WallJumpLock,
    velocity: &mut Vec2,
    tuning: &MovementTuning,
    now: f32,
) -> MotionPlan {
    let mut plan = MotionPlan {
        move_x: resolve_horizontal_input(input.horizontal_axis(), lock, now),
        ..default()
    };

    // Wall slide only counts while pushing into the wall
    state.touching_wall = state.wall.pressed_by(plan.move_x);

    if input.jump_pressed {
        plan.jump = try_jump(state, lock, velocity, &mut plan.move_x, tuning, now);
    } else if input.jump_released {
        plan.jump_cut = cut_jump(velocity);
    }

    state.target_velocity = Vec2::new(plan.move_x * tuning.max_speed, 0.0);
    plan
}

fn try_jump(
    state: &mut MovementState,
    lock: &mut WallJumpLock,
    velocity: &mut Vec2,
    move_x: &mut f32,
    tuning: &MovementTuning,
    now: f32,
) -> Option<JumpKind> {
    if state.grounded {
        velocity.y = tuning.jump_take_off_speed;
        state.air_jumps_used = 0;
        debug!("Ground jump");
        return Some(JumpKind::Ground);
    }

    if state.touching_wall {
        velocity.y = tuning.jump_take_off_speed;
        let pushed_left = state.wall == WallContact::Right;
        *move_x = -*move_x;
        state.touching_wall = false;
        *lock = WallJumpLock {
            lock_until: now + tuning.wall_jump_time.max(0.0),
            reversed_direction_is_left: pushed_left,
        };
        debug!("Wall jump: pushed_left={}", pushed_left);
        return Some(JumpKind::Wall { pushed_left });
    }

    if state.air_jumps_used < tuning.air_jump_budget() {
        velocity.y = tuning.jump_take_off_speed;
        state.air_jumps_used += 1;
        debug!(
            "Air jump: {}/{} used",
            state.air_jumps_used,
            tuning.air_jump_budget()
        );
        return Some(JumpKind::Air {
            count: state.air_jumps_used,
        });
    }

    debug!("Jump ignored: no ground, wall or air jump available");
    None
}

/// Halve upward speed on jump release.
fn cut_jump(velocity: &mut Vec2) -> bool {
    if velocity.y > 0.0 {
        velocity.y *= 0.5;
        true
    } else {
        false
    }
}
