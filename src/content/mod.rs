//! Content domain: loading and validating RON configuration at startup.

mod data;
mod loader;
mod validation;


pub use data::{TUNING_SCHEMA_VERSION, TuningFile};
pub use loader::{ContentLoadError, load_tuning_file, parse_tuning};
pub use validation::{TuningWarning, sanitize_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::player::PlayerTuning;

const TUNING_PATH: &str = "assets/data/player_tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_player_tuning);
    }
}

/// Load tuning from disk, falling back to defaults on any failure.
fn load_player_tuning(mut commands: Commands) {
    let mut tuning = match load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            info!("Loaded player tuning from {}", TUNING_PATH);
            tuning
        }
        Err(e) => {
            warn!("{}; using default player tuning", e);
            PlayerTuning::default()
        }
    };

    for warning in sanitize_tuning(&mut tuning) {
        warn!("Player tuning: {}", warning);
    }

    commands.insert_resource(tuning);
}
