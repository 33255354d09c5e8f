//! Animation parameters and trigger playback for the player sprite.
//!
//! There is no frame atlas yet: the animator drives sprite tint and size so
//! that every state and trigger is visible in play.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{JumpKind, Player};
use crate::player::{PlayerCue, PlayerCueEvent, PlayerStateMachine};

/// Parameters the state machine publishes once per tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimatorParams {
    /// 0 side, 1 up, 2 up-diagonal, 3 down-diagonal, 4 down
    pub direction: u8,
    pub grounded: bool,
    pub dashing: bool,
    pub sliding: bool,
    pub normalized_horizontal_speed: f32,
}

/// Animation states derived from [`AnimatorParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Airborne,
    Slide,
    Dash,
}

impl AnimationState {
    pub fn from_params(params: &AnimatorParams) -> Self {
        if params.dashing {
            AnimationState::Dash
        } else if params.sliding && !params.grounded {
            AnimationState::Slide
        } else if !params.grounded {
            AnimationState::Airborne
        } else if params.normalized_horizontal_speed > 0.05 {
            AnimationState::Run
        } else {
            AnimationState::Idle
        }
    }
}

/// One-shot triggers (double jump, fire, hurt) and their remaining flash time.
#[derive(Component, Debug, Default)]
pub struct AnimationTriggers {
    pub state: AnimationState,
    pub double_jump: f32,
    pub fire: f32,
    pub hurt: f32,
}

const TRIGGER_FLASH: f32 = 0.12;

pub(crate) fn apply_animation_cues(
    mut cues: MessageReader<PlayerCueEvent>,
    mut query: Query<&mut AnimationTriggers, With<Player>>,
) {
    for event in cues.read() {
        let Ok(mut triggers) = query.get_mut(event.player) else {
            continue;
        };

        match event.cue {
            PlayerCue::Jump(JumpKind::Air { .. }) => triggers.double_jump = TRIGGER_FLASH,
            PlayerCue::Fire { .. } => triggers.fire = TRIGGER_FLASH,
            PlayerCue::Hurt { .. } => triggers.hurt = TRIGGER_FLASH,
            _ => {}
        }
    }
}

pub(crate) fn update_player_animation(
    time: Res<Time>,
    fixed_time: Res<Time<Fixed>>,
    mut query: Query<
        (
            &AnimatorParams,
            &PlayerStateMachine,
            &mut AnimationTriggers,
            &mut Sprite,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    // Deadlines live on the simulation clock
    let now = fixed_time.elapsed_secs();

    for (params, machine, mut triggers, mut sprite) in &mut query {
        let state = AnimationState::from_params(params);
        if state != triggers.state {
            debug!("Animation {:?} -> {:?}", triggers.state, state);
            triggers.state = state;
        }

        triggers.double_jump = (triggers.double_jump - dt).max(0.0);
        triggers.fire = (triggers.fire - dt).max(0.0);
        triggers.hurt = (triggers.hurt - dt).max(0.0);

        let mut color = match state {
            AnimationState::Idle | AnimationState::Run => Color::srgb(0.9, 0.9, 0.9),
            AnimationState::Airborne => Color::srgb(0.85, 0.9, 1.0),
            AnimationState::Slide => Color::srgb(0.7, 0.8, 0.7),
            AnimationState::Dash => Color::srgb(0.4, 0.9, 1.0),
        };
        if triggers.double_jump > 0.0 {
            color = Color::srgb(1.0, 1.0, 0.6);
        }
        if triggers.fire > 0.0 {
            color = Color::srgb(1.0, 0.85, 0.5);
        }
        if triggers.hurt > 0.0 {
            color = Color::srgb(1.0, 0.3, 0.3);
        }

        // Blink while invincible
        let blink_off = machine.combat.is_invincible(now) && (now * 20.0) as i32 % 2 == 0;
        sprite.color = if blink_off {
            color.with_alpha(0.3)
        } else {
            color
        };

        let height = if machine.aim.crouching { 32.0 } else { 48.0 };
        sprite.custom_size = Some(Vec2::new(24.0, height));
    }
}
