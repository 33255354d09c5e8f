//! Aim domain: facing resolution, crosshair placement and its presentation.

mod resolver;
mod systems;


pub use resolver::{
    AimContext, AimInput, AimTuning, CrosshairPlacement, Facing, crosshair_placement, resolve_aim,
};
pub use systems::Crosshair;

use bevy::prelude::*;

use crate::aim::systems::sync_crosshair;

pub struct AimPlugin;

impl Plugin for AimPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, sync_crosshair);
    }
}
