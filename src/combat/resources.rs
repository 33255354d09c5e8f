//! Combat domain: tuning for health, recovery and shooting.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CombatTuning {
    pub max_health: i32,
    /// Input-blocked window right after a hit
    pub knockback_time: f32,
    /// Extra invincibility after the knockback window ends
    pub recover_time: f32,
    /// Horizontal speed away from the facing while flinching
    pub knockback_speed: f32,
    /// Damage from enemies and hazards without their own `DamageSource`
    pub contact_damage: i32,
    /// Healing from pickups without their own `HealthPickup` amount
    pub pickup_heal: i32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            max_health: 100,
            knockback_time: 0.1,
            recover_time: 0.5,
            knockback_speed: 96.0,
            contact_damage: 10,
            pickup_heal: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WeaponTuning {
    /// Minimum seconds between shots while fire is held
    pub shot_cooldown: f32,
    pub projectile_speed: f32,
    pub projectile_lifetime: f32,
}

impl Default for WeaponTuning {
    fn default() -> Self {
        Self {
            shot_cooldown: 0.2,
            projectile_speed: 720.0,
            projectile_lifetime: 1.2,
        }
    }
}
