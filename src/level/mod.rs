//! Level domain: level lifecycle around the player.

mod components;
mod spawn;
mod systems;


pub use components::{LevelEntity, LevelExit};

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::systems::{
    detect_level_exit, handle_advance_level, handle_reload_level, pause_physics, resume_physics,
    spawn_current_level,
};
use crate::player::PlayerSystems;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_current_level)
            .add_systems(OnEnter(GameState::LevelComplete), pause_physics)
            .add_systems(OnExit(GameState::LevelComplete), resume_physics)
            .add_systems(
                FixedUpdate,
                detect_level_exit
                    .after(PlayerSystems::Act)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (
                    handle_reload_level.run_if(in_state(GameState::Playing)),
                    handle_advance_level,
                ),
            );
    }
}
