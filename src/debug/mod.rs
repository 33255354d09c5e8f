//! Debug domain: developer hotkeys, enabled with the `dev-tools` feature.
//!
//! - F3: log a JSON snapshot of the player state machine
//! - F5: reload the current level
//! - F6: toggle god mode

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{apply_god_mode, handle_debug_hotkeys};
use crate::player::PlayerSystems;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, handle_debug_hotkeys)
            .add_systems(FixedUpdate, apply_god_mode.before(PlayerSystems::Act));
    }
}
