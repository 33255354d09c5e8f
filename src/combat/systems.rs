//! Combat domain: projectile spawning, lifetime and impact cleanup.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{Projectile, ProjectileLifetime, SpawnProjectileEvent};
use crate::level::LevelEntity;
use crate::movement::GameLayer;
use crate::player::PlayerTuning;

pub(crate) fn spawn_projectiles(
    mut commands: Commands,
    mut requests: MessageReader<SpawnProjectileEvent>,
    tuning: Res<PlayerTuning>,
) {
    for request in requests.read() {
        let angle = request.rotation_degrees.to_radians();
        let direction = Vec2::from_angle(angle);

        commands.spawn((
            Projectile,
            ProjectileLifetime(tuning.weapon.projectile_lifetime),
            LevelEntity,
            Sprite {
                color: Color::srgb(1.0, 0.85, 0.3),
                custom_size: Some(Vec2::new(10.0, 4.0)),
                ..default()
            },
            Transform::from_translation(request.position.extend(1.0))
                .with_rotation(Quat::from_rotation_z(angle)),
            (
                RigidBody::Dynamic,
                GravityScale(0.0),
                Collider::circle(3.0),
                Sensor,
                LinearVelocity(direction * tuning.weapon.projectile_speed),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Projectile,
                    [GameLayer::Environment, GameLayer::Enemy],
                ),
            ),
        ));
    }
}

pub(crate) fn tick_projectile_lifetime(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut ProjectileLifetime)>,
) {
    let dt = time.delta_secs();

    for (entity, mut lifetime) in &mut query {
        lifetime.0 -= dt;
        if lifetime.0 <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn despawn_projectiles_on_hit(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    projectiles: Query<(), With<Projectile>>,
) {
    for event in collision_events.read() {
        for entity in [event.collider1, event.collider2] {
            if projectiles.contains(entity) {
                commands.entity(entity).try_despawn();
            }
        }
    }
}
