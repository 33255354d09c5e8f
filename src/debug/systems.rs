//! Debug domain: hotkeys for snapshots, reloads and god mode.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use serde_json::{Value, json};

use crate::core::{LevelProgress, ReloadLevelEvent, ReloadReason};
use crate::debug::state::DebugState;
use crate::movement::Player;
use crate::player::PlayerStateMachine;

fn vec_json(v: Vec2) -> Value {
    json!([v.x, v.y])
}

/// Serializable view of one player's state machine.
pub(crate) fn player_snapshot(
    machine: &PlayerStateMachine,
    position: Vec2,
    velocity: Vec2,
    now: f32,
) -> Value {
    json!({
        "time": now,
        "mode": format!("{:?}", machine.mode),
        "position": vec_json(position),
        "velocity": vec_json(velocity),
        "movement": {
            "grounded": machine.movement.grounded,
            "wall": format!("{:?}", machine.movement.wall),
            "touching_wall": machine.movement.touching_wall,
            "air_jumps_used": machine.movement.air_jumps_used,
            "wall_lock_active": machine.wall_lock.is_active(now),
            "wall_lock_until": machine.wall_lock.lock_until,
        },
        "dash": {
            "active": machine.dash.active,
            "dash_end_time": machine.dash.dash_end_time,
            "next_dash_allowed_time": machine.dash.next_dash_allowed_time,
        },
        "combat": {
            "health": machine.combat.health,
            "max_health": machine.combat.max_health,
            "dead": machine.combat.dead,
            "flinching": machine.combat.is_flinching(now),
            "invincible": machine.combat.is_invincible(now),
        },
        "aim": {
            "facing": machine.aim.facing,
            "crouching": machine.aim.crouching,
            "mirrored": machine.aim.mirrored,
            "crosshair_offset": vec_json(machine.crosshair.offset),
            "crosshair_rotation": machine.crosshair.rotation_degrees,
        },
        "next_shot_time": machine.next_shot_time,
    })
}

/// F3 snapshot, F5 reload, F6 god mode
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time<Fixed>>,
    progress: Res<LevelProgress>,
    mut debug_state: ResMut<DebugState>,
    mut reload_events: MessageWriter<ReloadLevelEvent>,
    mut player_query: Query<(&Transform, &LinearVelocity, &mut PlayerStateMachine), With<Player>>,
) {
    let now = time.elapsed_secs();

    if keyboard.just_pressed(KeyCode::F3) {
        for (transform, velocity, machine) in &player_query {
            let snapshot = player_snapshot(machine, transform.translation.truncate(), velocity.0, now);
            match serde_json::to_string_pretty(&snapshot) {
                Ok(text) => info!("[DEBUG] level {} player state:\n{}", progress.level_index, text),
                Err(err) => warn!("[DEBUG] Failed to serialize player state: {}", err),
            }
        }
    }

    if keyboard.just_pressed(KeyCode::F5) {
        info!("[DEBUG] Reloading level");
        reload_events.write(ReloadLevelEvent {
            reason: ReloadReason::Manual,
        });
    }

    if keyboard.just_pressed(KeyCode::F6) {
        debug_state.god_mode = !debug_state.god_mode;
        info!(
            "[DEBUG] God mode {}",
            if debug_state.god_mode { "ON" } else { "OFF" }
        );

        if !debug_state.god_mode {
            // Fall back to whatever real hit recovery is still pending
            for (_, _, mut machine) in &mut player_query {
                machine.combat.invincible_until = machine.combat.flinching_until;
            }
        }
    }
}

/// Keep the invincibility window open while god mode is on. Also covers freshly spawned players.
pub(crate) fn apply_god_mode(
    debug_state: Res<DebugState>,
    mut player_query: Query<&mut PlayerStateMachine, With<Player>>,
) {
    if !debug_state.god_mode {
        return;
    }

    for mut machine in &mut player_query {
        machine.combat.invincible_until = f32::INFINITY;
    }
}
