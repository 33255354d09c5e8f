//! Level domain: the built-in test level.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{DamageSource, HealthPickup};
use crate::level::{LevelEntity, LevelExit};
use crate::movement::{ContactKind, GameLayer, SurfaceTag};
use crate::player::{PlayerTuning, spawn_player};

pub(crate) const PLAYER_SPAWN: Vec2 = Vec2::new(-300.0, -120.0);

fn spawn_block(commands: &mut Commands, kind: ContactKind, color: Color, size: Vec2, at: Vec2) {
    commands.spawn((
        LevelEntity,
        SurfaceTag(kind),
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(at.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(
            GameLayer::Environment,
            [GameLayer::Player, GameLayer::Projectile],
        ),
    ));
}

fn spawn_sensor(
    commands: &mut Commands,
    layer: GameLayer,
    color: Color,
    size: Vec2,
    at: Vec2,
) -> Entity {
    commands
        .spawn((
            LevelEntity,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(at.extend(-0.5)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionLayers::new(layer, [GameLayer::Player, GameLayer::Projectile]),
        ))
        .id()
}

/// Build level `index` and its player. Later levels shift platforms and add hazards.
pub(crate) fn spawn_level(commands: &mut Commands, tuning: &PlayerTuning, index: u32) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let shift = (index % 3) as f32 * 40.0;

    info!("Spawning level {}", index);

    // Floor, outer walls and platforms
    spawn_block(
        commands,
        ContactKind::Environment,
        ground_color,
        Vec2::new(1200.0, 40.0),
        Vec2::new(0.0, -200.0),
    );
    for x in [-620.0, 620.0] {
        spawn_block(
            commands,
            ContactKind::Environment,
            wall_color,
            Vec2::new(40.0, 700.0),
            Vec2::new(x, 130.0),
        );
    }
    spawn_block(
        commands,
        ContactKind::Environment,
        platform_color,
        Vec2::new(160.0, 20.0),
        Vec2::new(-250.0, -40.0 + shift),
    );
    spawn_block(
        commands,
        ContactKind::Environment,
        platform_color,
        Vec2::new(160.0, 20.0),
        Vec2::new(250.0, 60.0 + shift),
    );

    // Wall-jump shaft next to the exit ledge
    spawn_block(
        commands,
        ContactKind::Environment,
        wall_color,
        Vec2::new(30.0, 260.0),
        Vec2::new(420.0, 0.0),
    );
    spawn_block(
        commands,
        ContactKind::Environment,
        platform_color,
        Vec2::new(170.0, 20.0),
        Vec2::new(520.0, 200.0),
    );

    // Untagged glass pillar: solid, but not slidable
    spawn_block(
        commands,
        ContactKind::Other,
        Color::srgba(0.6, 0.8, 0.9, 0.5),
        Vec2::new(24.0, 120.0),
        Vec2::new(-60.0, -120.0),
    );

    // Enemy sensor: damages every tick while overlapping
    let enemy = spawn_sensor(
        commands,
        GameLayer::Enemy,
        Color::srgb(0.8, 0.3, 0.3),
        Vec2::new(32.0, 32.0),
        Vec2::new(100.0, -164.0),
    );
    commands.entity(enemy).insert(SurfaceTag(ContactKind::Enemy));

    // Armoured enemy: solid, damages once per impact
    commands.spawn((
        LevelEntity,
        SurfaceTag(ContactKind::Enemy),
        DamageSource { amount: 15 },
        Sprite {
            color: Color::srgb(0.6, 0.15, 0.15),
            custom_size: Some(Vec2::new(40.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(250.0, 90.0 + shift, 0.0),
        RigidBody::Static,
        Collider::rectangle(40.0, 40.0),
        CollisionLayers::new(GameLayer::Enemy, [GameLayer::Player, GameLayer::Projectile]),
    ));

    // Spikes, one more strip per level up to three
    for i in 0..=(index % 3) {
        let spikes = spawn_sensor(
            commands,
            GameLayer::Hazard,
            Color::srgb(0.9, 0.6, 0.1),
            Vec2::new(60.0, 12.0),
            Vec2::new(-450.0 + i as f32 * 140.0, -174.0),
        );
        commands
            .entity(spikes)
            .insert((SurfaceTag(ContactKind::Hazard), DamageSource { amount: 20 }));
    }

    // Health pickups
    for at in [Vec2::new(-250.0, 0.0 + shift), Vec2::new(0.0, -160.0)] {
        let pickup = spawn_sensor(
            commands,
            GameLayer::Pickup,
            Color::srgb(0.3, 0.9, 0.4),
            Vec2::new(16.0, 16.0),
            at,
        );
        commands.entity(pickup).insert((
            SurfaceTag(ContactKind::PickUp),
            HealthPickup {
                amount: tuning.combat.pickup_heal,
            },
        ));
    }

    // Exit on the high ledge
    let exit = spawn_sensor(
        commands,
        GameLayer::Sensor,
        Color::srgba(0.9, 0.9, 0.2, 0.6),
        Vec2::new(40.0, 60.0),
        Vec2::new(560.0, 240.0),
    );
    commands.entity(exit).insert(LevelExit);

    spawn_player(commands, tuning, PLAYER_SPAWN);
}
