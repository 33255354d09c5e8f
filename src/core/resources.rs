//! Core domain: level progression.

use bevy::prelude::*;

#[derive(Resource, Debug, Default)]
pub struct LevelProgress {
    pub level_index: u32,
    /// Latched on the first exit touch so completion fires once per level
    pub exit_reached: bool,
    /// Reloads of the current run, for diagnostics
    pub reloads: u32,
}
