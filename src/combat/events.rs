//! Combat domain: requests to the projectile collaborator.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Spawn a shot at a world position, travelling along `rotation_degrees`.
#[derive(Debug, Clone, Copy)]
pub struct SpawnProjectileEvent {
    pub position: Vec2,
    pub rotation_degrees: f32,
}

impl Message for SpawnProjectileEvent {}
