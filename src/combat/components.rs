//! Combat domain: damage sources, pickups and projectiles.

use bevy::prelude::*;

/// Overrides the default contact damage of an enemy or hazard collider.
#[derive(Component, Debug, Clone, Copy)]
pub struct DamageSource {
    pub amount: i32,
}

/// Health restored when the player touches this pickup.
#[derive(Component, Debug, Clone, Copy)]
pub struct HealthPickup {
    pub amount: i32,
}

#[derive(Component, Debug)]
pub struct Projectile;

/// Seconds until a projectile despawns on its own.
#[derive(Component, Debug)]
pub struct ProjectileLifetime(pub f32);
