//! Aim domain: keeps the crosshair entity and sprite mirroring in sync.

use bevy::prelude::*;

use crate::movement::Player;
use crate::player::PlayerStateMachine;

/// Child of the player marking where shots spawn.
#[derive(Component, Debug)]
pub struct Crosshair;

pub(crate) fn sync_crosshair(
    mut players: Query<(&PlayerStateMachine, &mut Sprite), With<Player>>,
    mut crosshairs: Query<(&ChildOf, &mut Transform), With<Crosshair>>,
) {
    for (machine, mut sprite) in &mut players {
        sprite.flip_x = machine.crosshair.mirrored;
    }

    for (child_of, mut transform) in &mut crosshairs {
        let Ok((machine, _)) = players.get(child_of.parent()) else {
            continue;
        };
        let placement = machine.crosshair;
        transform.translation.x = placement.offset.x;
        transform.translation.y = placement.offset.y;
        transform.rotation = Quat::from_rotation_z(placement.rotation_degrees.to_radians());
    }
}
