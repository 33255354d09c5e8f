//! Combat domain: health, hit recovery, damage sources and projectiles.

mod components;
mod controller;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{DamageSource, HealthPickup, Projectile, ProjectileLifetime};
pub use controller::{CombatState, DamageOutcome};
pub use events::SpawnProjectileEvent;
pub use resources::{CombatTuning, WeaponTuning};

use bevy::prelude::*;

use crate::combat::systems::{
    despawn_projectiles_on_hit, spawn_projectiles, tick_projectile_lifetime,
};
use crate::player::PlayerSystems;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SpawnProjectileEvent>().add_systems(
            FixedUpdate,
            (
                spawn_projectiles,
                tick_projectile_lifetime,
                despawn_projectiles_on_hit,
            )
                .after(PlayerSystems::Act),
        );
    }
}
