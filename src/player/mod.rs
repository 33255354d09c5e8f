//! Player domain: the state machine orchestrating movement, dash, combat and aim.

mod bootstrap;
mod events;
mod machine;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub(crate) use bootstrap::spawn_player;
pub use events::PlayerCueEvent;
pub use machine::{PlayerCue, PlayerMode, PlayerStateMachine, TickReport};
pub use resources::PlayerTuning;

use bevy::prelude::*;

use crate::core::GameState;
use crate::player::systems::tick_player;

/// Fixed-tick ordering: sense contacts, then run the state machine.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlayerSystems {
    Sense,
    Act,
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTuning>()
            .add_message::<PlayerCueEvent>()
            .configure_sets(
                FixedUpdate,
                (PlayerSystems::Sense, PlayerSystems::Act)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(FixedUpdate, tick_player.in_set(PlayerSystems::Act));
    }
}
