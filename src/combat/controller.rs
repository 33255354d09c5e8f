//! Combat domain: health with nested flinch and invincibility windows.

use bevy::prelude::*;

use crate::combat::CombatTuning;

/// Player health and hit-recovery deadlines.
///
/// The flinch window is always a prefix of the invincibility window:
/// `flinching_until <= invincible_until`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatState {
    pub health: i32,
    pub max_health: i32,
    pub invincible_until: f32,
    pub flinching_until: f32,
    pub dead: bool,
}

/// What happened to a damage request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Still inside the invincibility window
    Blocked,
    /// Already dead, or a non-positive amount
    Ignored,
    Hurt { remaining: i32 },
    Died,
}

impl CombatState {
    pub fn new(max_health: i32) -> Self {
        let max_health = max_health.max(1);
        Self {
            health: max_health,
            max_health,
            invincible_until: 0.0,
            flinching_until: 0.0,
            dead: false,
        }
    }

    pub fn is_invincible(&self, now: f32) -> bool {
        now < self.invincible_until
    }

    pub fn is_flinching(&self, now: f32) -> bool {
        now < self.flinching_until
    }

    pub fn percent(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    /// Take a hit. Starts the flinch and invincibility windows unless the hit kills.
    pub fn apply_damage(&mut self, amount: i32, now: f32, tuning: &CombatTuning) -> DamageOutcome {
        if self.dead || amount <= 0 {
            return DamageOutcome::Ignored;
        }
        if self.is_invincible(now) {
            debug!("Damage blocked: invincible for {:.2}s", self.invincible_until - now);
            return DamageOutcome::Blocked;
        }

        self.health = (self.health - amount).max(0);
        if self.health == 0 {
            self.dead = true;
            info!("Player died");
            return DamageOutcome::Died;
        }

        let knockback = tuning.knockback_time.max(0.0);
        self.flinching_until = now + knockback;
        self.invincible_until = self.flinching_until + tuning.recover_time.max(0.0);

        DamageOutcome::Hurt {
            remaining: self.health,
        }
    }

    /// Heal up to max health. Returns the amount actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        if self.dead || amount <= 0 {
            return 0;
        }
        let actual = amount.min(self.max_health - self.health);
        self.health += actual;
        actual
    }
}
