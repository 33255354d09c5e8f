//! UI domain: in-run HUD and the level-complete flow.

mod hud_player;
mod level_complete;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::hud_player::{spawn_player_healthbar_ui, update_level_label, update_player_healthbar};
use crate::ui::level_complete::{cleanup_level_complete, handle_continue, show_level_complete};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player_healthbar_ui)
            .add_systems(
                Update,
                (
                    update_player_healthbar,
                    update_level_label,
                    show_level_complete,
                    handle_continue.run_if(in_state(GameState::LevelComplete)),
                ),
            )
            .add_systems(OnExit(GameState::LevelComplete), cleanup_level_complete);
    }
}
