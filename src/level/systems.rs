//! Level domain: spawning, reload on death, exit trigger and advancing.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{AdvanceLevelEvent, GameState, LevelCompleteEvent, LevelProgress, ReloadLevelEvent};
use crate::level::spawn::spawn_level;
use crate::level::{LevelEntity, LevelExit};
use crate::movement::Player;
use crate::player::PlayerTuning;

fn despawn_level(commands: &mut Commands, level_entities: &Query<Entity, With<LevelEntity>>) {
    for entity in level_entities {
        commands.entity(entity).try_despawn();
    }
}

/// Build the current level on entering play if none exists yet.
pub(crate) fn spawn_current_level(
    mut commands: Commands,
    tuning: Res<PlayerTuning>,
    mut progress: ResMut<LevelProgress>,
    existing: Query<(), With<LevelEntity>>,
) {
    if !existing.is_empty() {
        return;
    }
    progress.exit_reached = false;
    spawn_level(&mut commands, &tuning, progress.level_index);
}

/// Tear down and rebuild the current level. Several requests in one frame reload once.
pub(crate) fn handle_reload_level(
    mut commands: Commands,
    mut reload_events: MessageReader<ReloadLevelEvent>,
    tuning: Res<PlayerTuning>,
    mut progress: ResMut<LevelProgress>,
    level_entities: Query<Entity, With<LevelEntity>>,
) {
    let Some(event) = reload_events.read().last() else {
        return;
    };

    progress.reloads += 1;
    info!(
        "Reloading level {} ({:?}), reload #{}",
        progress.level_index, event.reason, progress.reloads
    );
    despawn_level(&mut commands, &level_entities);
    progress.exit_reached = false;
    spawn_level(&mut commands, &tuning, progress.level_index);
}

/// First touch of the exit completes the level.
pub(crate) fn detect_level_exit(
    mut collision_events: MessageReader<CollisionStart>,
    mut complete_events: MessageWriter<LevelCompleteEvent>,
    mut next_state: ResMut<NextState<GameState>>,
    mut progress: ResMut<LevelProgress>,
    players: Query<(), With<Player>>,
    exits: Query<(), With<LevelExit>>,
) {
    for event in collision_events.read() {
        if progress.exit_reached {
            continue;
        }

        let reached = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ]
        .into_iter()
        .any(|(a, b)| players.contains(a) && exits.contains(b));

        if reached {
            progress.exit_reached = true;
            info!("Level {} complete", progress.level_index);
            complete_events.write(LevelCompleteEvent {
                level_index: progress.level_index,
            });
            next_state.set(GameState::LevelComplete);
        }
    }
}

/// Move to the next level: clear the old one and let `OnEnter(Playing)` rebuild.
pub(crate) fn handle_advance_level(
    mut commands: Commands,
    mut advance_events: MessageReader<AdvanceLevelEvent>,
    mut progress: ResMut<LevelProgress>,
    mut next_state: ResMut<NextState<GameState>>,
    level_entities: Query<Entity, With<LevelEntity>>,
) {
    if advance_events.read().count() == 0 {
        return;
    }

    progress.level_index += 1;
    info!("Advancing to level {}", progress.level_index);
    despawn_level(&mut commands, &level_entities);
    next_state.set(GameState::Playing);
}

/// Freeze the physics world behind the level-complete overlay.
pub(crate) fn pause_physics(mut time: ResMut<Time<Physics>>) {
    time.pause();
}

pub(crate) fn resume_physics(mut time: ResMut<Time<Physics>>) {
    time.unpause();
}
