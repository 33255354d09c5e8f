//! Player domain: aggregated tuning for every controller.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::aim::AimTuning;
use crate::combat::{CombatTuning, WeaponTuning};
use crate::movement::MovementTuning;

/// All player tunables, loaded from `player_tuning.ron` at startup.
#[derive(Resource, Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub movement: MovementTuning,
    pub combat: CombatTuning,
    pub aim: AimTuning,
    pub weapon: WeaponTuning,
}
