//! Core domain: events for level reload, completion and advancing.

use bevy::ecs::message::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadReason {
    PlayerDied,
    Manual,
}

/// Tear down the current level and rebuild it with a fresh player.
#[derive(Debug)]
pub struct ReloadLevelEvent {
    pub reason: ReloadReason,
}

impl Message for ReloadLevelEvent {}

/// The player reached the exit; show the level-complete UI.
#[derive(Debug)]
pub struct LevelCompleteEvent {
    pub level_index: u32,
}

impl Message for LevelCompleteEvent {}

/// Leave the completed level and start the next one.
#[derive(Debug)]
pub struct AdvanceLevelEvent;

impl Message for AdvanceLevelEvent {}
