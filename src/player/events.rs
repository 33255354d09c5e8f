//! Player domain: cue messages for presentation collaborators.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::player::PlayerCue;

/// Fire-and-forget notification of something the player did this tick.
#[derive(Debug, Clone, Copy)]
pub struct PlayerCueEvent {
    pub player: Entity,
    pub cue: PlayerCue,
}

impl Message for PlayerCueEvent {}
