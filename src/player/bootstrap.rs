//! Player domain: spawning a fresh player for a level.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::aim::Crosshair;
use crate::level::LevelEntity;
use crate::movement::{ContactReport, GameLayer, Player};
use crate::player::{PlayerStateMachine, PlayerTuning};
use crate::sprites::{AnimationTriggers, AnimatorParams};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn a player with full health, idle dash and no locks.
pub(crate) fn spawn_player(commands: &mut Commands, tuning: &PlayerTuning, position: Vec2) -> Entity {
    let machine = PlayerStateMachine::new(tuning);
    info!(
        "Spawning player at {:?}: health={}, air_jumps={}",
        position,
        machine.combat.health,
        tuning.movement.air_jump_budget()
    );

    commands
        .spawn((
            // Identity & state
            (
                Player,
                LevelEntity,
                machine,
                ContactReport::default(),
                AnimatorParams::default(),
                AnimationTriggers::default(),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [
                        GameLayer::Environment,
                        GameLayer::Enemy,
                        GameLayer::Hazard,
                        GameLayer::Pickup,
                        GameLayer::Sensor,
                    ],
                ),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                Crosshair,
                Sprite {
                    color: Color::srgba(1.0, 0.3, 0.3, 0.8),
                    custom_size: Some(Vec2::new(6.0, 2.0)),
                    ..default()
                },
                Transform::from_xyz(tuning.aim.shot_spawn_distance, 0.0, 1.0),
            ));
        })
        .id()
}
