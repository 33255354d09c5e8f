//! Movement domain: input, contact sensing, motion planning and dash.

mod components;
mod dash;
mod planner;
mod resources;
mod systems;


pub use components::{
    ContactEntry, ContactKind, ContactReport, GameLayer, MovementState, PickupContact, Player,
    SurfaceTag, TouchingContact, WallContact, WallJumpLock,
};
pub use dash::{DashState, DashTick, tick_dash};
pub use planner::{JumpKind, MotionPlan, plan_motion, resolve_horizontal_input};
pub use resources::{InputSnapshot, MovementTuning};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::systems::{
    collect_contacts, detect_ground, detect_walls, read_input, reset_input,
};
use crate::player::PlayerSystems;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSnapshot>()
            .add_systems(Update, read_input)
            .add_systems(OnEnter(GameState::Playing), reset_input)
            .add_systems(
                FixedUpdate,
                (detect_ground, detect_walls, collect_contacts)
                    .chain()
                    .in_set(PlayerSystems::Sense),
            );
    }
}
