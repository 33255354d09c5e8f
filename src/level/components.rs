//! Level domain: markers for level-owned entities and triggers.

use bevy::prelude::*;

/// Everything despawned when the level is torn down or reloaded.
#[derive(Component, Debug)]
pub struct LevelEntity;

/// Trigger that completes the level when the player enters it.
#[derive(Component, Debug)]
pub struct LevelExit;
