//! Core domain: game states, level events and progression.

mod events;
mod resources;
mod state;
mod systems;

pub use events::{AdvanceLevelEvent, LevelCompleteEvent, ReloadLevelEvent, ReloadReason};
pub use resources::LevelProgress;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{finish_boot, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<LevelProgress>()
            .add_message::<ReloadLevelEvent>()
            .add_message::<LevelCompleteEvent>()
            .add_message::<AdvanceLevelEvent>()
            .add_systems(Startup, (setup_camera, finish_boot));
    }
}
