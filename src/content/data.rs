//! Data definitions for RON configuration files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization.

use serde::{Deserialize, Serialize};

use crate::player::PlayerTuning;

/// Schema version this build understands.
pub const TUNING_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Player tuning (player_tuning.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TuningFile {
    pub schema_version: u32,
    #[serde(default)]
    pub tuning: PlayerTuning,
}
