//! Player domain: the per-tick state machine tying all controllers together.
//!
//! Each tick resolves in a fixed priority order:
//! contacts and damage, then flinch knockback, then dash, then normal
//! movement with aim and fire. The first branch that owns the tick stops
//! the ones after it.

use bevy::prelude::*;

use crate::aim::{AimContext, AimInput, CrosshairPlacement, crosshair_placement, resolve_aim};
use crate::combat::{CombatState, CombatTuning, DamageOutcome};
use crate::movement::{
    ContactReport, DashState, DashTick, InputSnapshot, JumpKind, MovementState, WallJumpLock,
    plan_motion, tick_dash,
};
use crate::player::PlayerTuning;
use crate::sprites::AnimatorParams;

/// Which branch owned the last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerMode {
    #[default]
    Normal,
    Dashing,
    Flinching,
}

/// Side effects of a tick for the animation, projectile and scene collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerCue {
    Jump(JumpKind),
    DashStarted,
    DashRejected,
    /// Shot request at a local offset from the player
    Fire {
        offset: Vec2,
        rotation_degrees: f32,
    },
    Hurt {
        remaining: i32,
    },
    Died,
    /// A pickup was used up; `healed` may be 0 at full health
    PickupConsumed {
        entity: Entity,
        healed: i32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub mode: PlayerMode,
    pub cues: Vec<PlayerCue>,
    pub animator: AnimatorParams,
}

/// All per-life player state. Recreated from scratch on every level (re)load.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PlayerStateMachine {
    pub movement: MovementState,
    pub wall_lock: WallJumpLock,
    pub dash: DashState,
    pub combat: CombatState,
    pub aim: AimContext,
    pub crosshair: CrosshairPlacement,
    pub next_shot_time: f32,
    pub mode: PlayerMode,
}

impl PlayerStateMachine {
    pub fn new(tuning: &PlayerTuning) -> Self {
        let aim = AimContext::default();
        Self {
            movement: MovementState::default(),
            wall_lock: WallJumpLock::default(),
            dash: DashState::default(),
            combat: CombatState::new(tuning.combat.max_health),
            aim,
            crosshair: crosshair_placement(&aim, &tuning.aim),
            next_shot_time: 0.0,
            mode: PlayerMode::Normal,
        }
    }

    /// Advance one simulation step.
    ///
    /// `velocity` is the physics body's velocity: its horizontal component is
    /// overwritten with the target velocity, its vertical component is only
    /// touched by jumps, jump release, dash and hit recovery.
    pub fn tick(
        &mut self,
        input: &InputSnapshot,
        contacts: &ContactReport,
        velocity: &mut Vec2,
        tuning: &PlayerTuning,
        now: f32,
    ) -> TickReport {
        let mut cues = Vec::new();

        self.movement.sync_contacts(contacts.grounded, contacts.wall);
        self.resolve_contacts(contacts, velocity, tuning, now, &mut cues);

        self.mode = if self.combat.is_flinching(now) {
            self.dash.cancel();
            self.knock_back(&tuning.combat);
            PlayerMode::Flinching
        } else {
            match tick_dash(
                &mut self.dash,
                input,
                self.aim.facing,
                self.aim.mirrored,
                velocity,
                &tuning.movement,
                now,
            ) {
                DashTick::Overriding { started } => {
                    if started {
                        cues.push(PlayerCue::DashStarted);
                    }
                    self.movement.target_velocity = Vec2::new(velocity.x, 0.0);
                    PlayerMode::Dashing
                }
                DashTick::Idle { rejected } => {
                    if rejected {
                        cues.push(PlayerCue::DashRejected);
                    }
                    self.normal_movement(input, velocity, tuning, now, &mut cues);
                    PlayerMode::Normal
                }
            }
        };

        velocity.x = self.movement.target_velocity.x;

        TickReport {
            mode: self.mode,
            cues,
            animator: self.animator_params(*velocity, tuning),
        }
    }

    /// Heal from pickups, then apply solid impacts, then persistent overlaps.
    fn resolve_contacts(
        &mut self,
        contacts: &ContactReport,
        velocity: &mut Vec2,
        tuning: &PlayerTuning,
        now: f32,
        cues: &mut Vec<PlayerCue>,
    ) {
        for pickup in &contacts.pickups {
            let healed = self.combat.heal(pickup.amount);
            cues.push(PlayerCue::PickupConsumed {
                entity: pickup.entity,
                healed,
            });
        }

        let damages = contacts
            .impacts
            .iter()
            .copied()
            .chain(contacts.touching.iter().map(|c| c.damage));

        for amount in damages {
            match self.combat.apply_damage(amount, now, &tuning.combat) {
                DamageOutcome::Hurt { remaining } => {
                    velocity.y = tuning.movement.recovery_impulse();
                    cues.push(PlayerCue::Hurt { remaining });
                }
                DamageOutcome::Died => cues.push(PlayerCue::Died),
                DamageOutcome::Blocked | DamageOutcome::Ignored => {}
            }
        }
    }

    /// Push away from the facing while flinching. Input is ignored.
    fn knock_back(&mut self, tuning: &CombatTuning) {
        let away = if self.aim.mirrored { 1.0 } else { -1.0 };
        self.movement.target_velocity = Vec2::new(away * tuning.knockback_speed, 0.0);
    }

    fn normal_movement(
        &mut self,
        input: &InputSnapshot,
        velocity: &mut Vec2,
        tuning: &PlayerTuning,
        now: f32,
        cues: &mut Vec<PlayerCue>,
    ) {
        let plan = plan_motion(
            input,
            &mut self.movement,
            &mut self.wall_lock,
            velocity,
            &tuning.movement,
            now,
        );
        if let Some(jump) = plan.jump {
            cues.push(PlayerCue::Jump(jump));
        }

        self.aim = resolve_aim(
            &AimInput {
                move_x: plan.move_x,
                vertical: input.vertical_axis(),
                aim_up: input.aim_up,
                aim_down: input.aim_down,
                grounded: self.movement.grounded,
                wall_sliding: self.movement.touching_wall,
            },
            self.aim,
        );
        self.crosshair = crosshair_placement(&self.aim, &tuning.aim);

        if input.fire_held && now >= self.next_shot_time {
            self.next_shot_time = now + tuning.weapon.shot_cooldown.max(0.0);
            cues.push(PlayerCue::Fire {
                offset: self.crosshair.offset,
                rotation_degrees: self.crosshair.rotation_degrees,
            });
        }
    }

    fn animator_params(&self, velocity: Vec2, tuning: &PlayerTuning) -> AnimatorParams {
        let max_speed = tuning.movement.max_speed;
        AnimatorParams {
            direction: self.aim.facing.animation_direction(),
            grounded: self.movement.grounded,
            dashing: self.mode == PlayerMode::Dashing,
            sliding: self.movement.touching_wall,
            normalized_horizontal_speed: if max_speed > 0.0 {
                velocity.x.abs() / max_speed
            } else {
                0.0
            },
        }
    }
}
