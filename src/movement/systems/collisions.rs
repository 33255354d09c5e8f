//! Movement domain: ground, wall and contact collection from the physics world.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{CombatTuning, DamageSource, HealthPickup};
use crate::movement::{
    ContactEntry, ContactKind, ContactReport, GameLayer, Player, SurfaceTag, WallContact,
};
use crate::player::PlayerTuning;

const PROBE_DISTANCE: f32 = 4.0;

fn half_extents(collider: &Collider) -> Vec2 {
    match collider.shape_scaled().as_cuboid() {
        Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
        None => Vec2::new(12.0, 24.0),
    }
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut ContactReport), With<Player>>,
) {
    // Only environment geometry counts as ground (not enemies, pickups, exits)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Environment);

    for (transform, collider, mut report) in &mut query {
        let was_grounded = report.grounded;
        let half = half_extents(collider);

        let hit = spatial_query.cast_ray(
            transform.translation.truncate(),
            Dir2::NEG_Y,
            half.y + PROBE_DISTANCE,
            true,
            &ground_filter,
        );

        report.grounded = hit.is_some();

        if report.grounded != was_grounded {
            debug!("Grounded changed: {}", report.grounded);
        }
    }
}

/// Only surfaces explicitly tagged as environment can be slid on.
pub(crate) fn is_slidable_wall(tag: Option<&SurfaceTag>) -> bool {
    tag.is_some_and(|tag| tag.0 == ContactKind::Environment)
}

pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    tuning: Res<PlayerTuning>,
    tags: Query<&SurfaceTag>,
    mut query: Query<(&Transform, &Collider, &mut ContactReport), With<Player>>,
) {
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Environment);

    for (transform, collider, mut report) in &mut query {
        if !tuning.movement.enable_wall_jump {
            report.wall = WallContact::None;
            continue;
        }

        let origin = transform.translation.truncate();
        let reach = half_extents(collider).x + PROBE_DISTANCE;

        let hits_wall = |direction: Dir2| {
            spatial_query
                .cast_ray(origin, direction, reach, true, &wall_filter)
                .is_some_and(|hit| is_slidable_wall(tags.get(hit.entity).ok()))
        };

        report.wall = match (hits_wall(Dir2::NEG_X), hits_wall(Dir2::X)) {
            (true, false) => WallContact::Left,
            (false, true) => WallContact::Right,
            _ => WallContact::None,
        };
    }
}

/// Map a collider the player started touching to its effect, if any.
pub(crate) fn classify_contact(
    tag: Option<&SurfaceTag>,
    is_sensor: bool,
    damage: Option<&DamageSource>,
    pickup: Option<&HealthPickup>,
    tuning: &CombatTuning,
) -> Option<ContactEntry> {
    match tag.map(|t| t.0).unwrap_or_default() {
        ContactKind::Enemy | ContactKind::Hazard => {
            let damage = damage.map_or(tuning.contact_damage, |d| d.amount);
            Some(if is_sensor {
                ContactEntry::Touching { damage }
            } else {
                ContactEntry::Impact { damage }
            })
        }
        ContactKind::PickUp => Some(ContactEntry::Pickup {
            amount: pickup.map_or(tuning.pickup_heal, |p| p.amount),
        }),
        ContactKind::Environment | ContactKind::Other => None,
    }
}

/// Classify collision messages involving the player into its [`ContactReport`].
pub(crate) fn collect_contacts(
    mut collision_start: MessageReader<CollisionStart>,
    mut collision_end: MessageReader<CollisionEnd>,
    tuning: Res<PlayerTuning>,
    colliders: Query<(
        Option<&SurfaceTag>,
        Has<Sensor>,
        Option<&DamageSource>,
        Option<&HealthPickup>,
    )>,
    alive: Query<Entity>,
    mut players: Query<&mut ContactReport, With<Player>>,
) {
    for event in collision_start.read() {
        for (player_entity, other) in [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ] {
            let Ok(mut report) = players.get_mut(player_entity) else {
                continue;
            };
            let Ok((tag, is_sensor, damage, pickup)) = colliders.get(other) else {
                continue;
            };

            if let Some(entry) = classify_contact(tag, is_sensor, damage, pickup, &tuning.combat) {
                report.record(other, entry);
            }
        }
    }

    for event in collision_end.read() {
        for (player_entity, other) in [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ] {
            if let Ok(mut report) = players.get_mut(player_entity) {
                report.stop_touching(other);
            }
        }
    }

    // Despawned colliders may never send an end message
    for mut report in &mut players {
        report.touching.retain(|c| alive.contains(c.entity));
    }
}
