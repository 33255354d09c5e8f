//! Debug domain: toggles for developer tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Player ignores all damage while set
    pub god_mode: bool,
}
