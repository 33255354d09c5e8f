//! Movement domain: timed dash with an independent cooldown.

use bevy::prelude::*;

use crate::aim::Facing;
use crate::movement::{InputSnapshot, MovementTuning};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashState {
    pub active: bool,
    pub dash_end_time: f32,
    pub next_dash_allowed_time: f32,
}

impl DashState {
    /// Start a dash if the cooldown has elapsed. Requests during cooldown are dropped,
    /// as are requests for a zero-length dash, which leave the cooldown untouched.
    pub fn try_start(&mut self, now: f32, tuning: &MovementTuning) -> bool {
        if !(tuning.dash_time > 0.0) {
            debug!("Can't dash: dash_time is {}", tuning.dash_time);
            return false;
        }
        if now < self.next_dash_allowed_time {
            debug!(
                "Can't dash yet: {:.2}s of cooldown left",
                self.next_dash_allowed_time - now
            );
            return false;
        }

        self.active = true;
        self.dash_end_time = now + tuning.dash_time;
        self.next_dash_allowed_time = now + tuning.dash_cool_down.max(0.0);
        true
    }

    /// End the dash once its deadline passes. Cooldown is left alone.
    pub fn expire(&mut self, now: f32) {
        if self.active && now >= self.dash_end_time {
            self.active = false;
        }
    }

    /// Forcibly stop the dash (used when the player is hit).
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self, now: f32) -> bool {
        self.active && now < self.dash_end_time
    }
}

/// Outcome of the per-tick dash check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashTick {
    /// Dash owns this tick's velocity
    Overriding { started: bool },
    /// Normal movement should run
    Idle { rejected: bool },
}

impl DashTick {
    pub fn is_overriding(&self) -> bool {
        matches!(self, DashTick::Overriding { .. })
    }
}

/// Per-tick dash check.
///
/// When dashing, forces horizontal velocity to the dash speed along the
/// facing and zeroes vertical velocity. `mirrored` picks the side for
/// the purely vertical facings.
pub fn tick_dash(
    dash: &mut DashState,
    input: &InputSnapshot,
    facing: Facing,
    mirrored: bool,
    velocity: &mut Vec2,
    tuning: &MovementTuning,
    now: f32,
) -> DashTick {
    dash.expire(now);

    let mut started = false;
    let mut rejected = false;
    if tuning.enable_dash && input.dash_pressed {
        started = dash.try_start(now, tuning);
        rejected = !started;
    }

    if !dash.is_active(now) {
        return DashTick::Idle { rejected };
    }

    let sign = facing
        .horizontal_sign()
        .unwrap_or(if mirrored { -1.0 } else { 1.0 });
    velocity.x = sign * tuning.dash_speed;
    velocity.y = 0.0;

    DashTick::Overriding { started }
}
