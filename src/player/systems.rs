//! Player domain: fixed-tick driver and cue dispatch.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::SpawnProjectileEvent;
use crate::core::{ReloadLevelEvent, ReloadReason};
use crate::movement::{ContactReport, InputSnapshot, Player};
use crate::player::{PlayerCue, PlayerCueEvent, PlayerStateMachine, PlayerTuning};
use crate::sprites::AnimatorParams;

/// Run one state machine step per player and write the result back to physics.
pub(crate) fn tick_player(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<PlayerTuning>,
    mut input: ResMut<InputSnapshot>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut PlayerStateMachine,
            &mut ContactReport,
            &mut LinearVelocity,
            &mut AnimatorParams,
        ),
        With<Player>,
    >,
    mut cue_events: MessageWriter<PlayerCueEvent>,
    mut projectile_events: MessageWriter<SpawnProjectileEvent>,
    mut reload_events: MessageWriter<ReloadLevelEvent>,
) {
    let now = time.elapsed_secs();

    for (entity, transform, mut machine, mut contacts, mut linear_velocity, mut animator) in
        &mut query
    {
        let mut velocity = linear_velocity.0;
        let report = machine.tick(&input, &contacts, &mut velocity, &tuning, now);
        linear_velocity.0 = velocity;
        contacts.end_tick();
        *animator = report.animator;

        for cue in report.cues {
            match cue {
                PlayerCue::Fire {
                    offset,
                    rotation_degrees,
                } => {
                    projectile_events.write(SpawnProjectileEvent {
                        position: transform.translation.truncate() + offset,
                        rotation_degrees,
                    });
                }
                PlayerCue::Died => {
                    reload_events.write(ReloadLevelEvent {
                        reason: ReloadReason::PlayerDied,
                    });
                }
                PlayerCue::PickupConsumed { entity, healed } => {
                    debug!("Pickup consumed, healed {}", healed);
                    commands.entity(entity).try_despawn();
                }
                PlayerCue::Hurt { remaining } => {
                    info!("Player hurt, health {}", remaining);
                }
                PlayerCue::DashRejected => {
                    debug!("Dash request dropped during cooldown");
                }
                PlayerCue::Jump(_) | PlayerCue::DashStarted => {}
            }

            cue_events.write(PlayerCueEvent {
                player: entity,
                cue,
            });
        }
    }

    input.clear_edges();
}
