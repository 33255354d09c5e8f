//! Sprite presentation: the animation collaborator for the player.

mod animation;

pub use animation::{AnimationState, AnimationTriggers, AnimatorParams};

use bevy::prelude::*;

use crate::sprites::animation::{apply_animation_cues, update_player_animation};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (apply_animation_cues, update_player_animation).chain());
    }
}
