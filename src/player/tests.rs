//! Player domain: tests for tick ordering, cues and randomized tick sequences.

use bevy::prelude::{Entity, Vec2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{PlayerCue, PlayerMode, PlayerStateMachine, PlayerTuning};
use crate::aim::Facing;
use crate::movement::{ContactReport, InputSnapshot, JumpKind, PickupContact, WallContact};

const DT: f32 = 1.0 / 64.0;

fn grounded() -> ContactReport {
    ContactReport {
        grounded: true,
        ..Default::default()
    }
}

fn count_cues(cues: &[PlayerCue], pred: impl Fn(&PlayerCue) -> bool) -> usize {
    cues.iter().filter(|cue| pred(*cue)).count()
}

// -----------------------------------------------------------------------------
// Priority order
// -----------------------------------------------------------------------------

#[test]
fn test_fresh_machine_defaults() {
    let tuning = PlayerTuning::default();
    let machine = PlayerStateMachine::new(&tuning);

    assert_eq!(machine.combat.health, tuning.combat.max_health);
    assert_eq!(machine.aim.facing, Facing::Right);
    assert_eq!(machine.mode, PlayerMode::Normal);
    assert!(!machine.dash.active);
    assert_eq!(
        machine.crosshair.offset,
        Vec2::new(tuning.aim.shot_spawn_distance, 0.0)
    );
}

#[test]
fn test_hit_flinches_and_drops_dash_request() {
    let tuning = PlayerTuning::default();
    let mut machine = PlayerStateMachine::new(&tuning);
    let mut velocity = Vec2::ZERO;
    let mut contacts = grounded();
    contacts.impacts.push(10);
    let input = InputSnapshot {
        horizontal: 1.0,
        dash_pressed: true,
        jump_pressed: true,
        ..Default::default()
    };

    let report = machine.tick(&input, &contacts, &mut velocity, &tuning, 0.0);

    assert_eq!(report.mode, PlayerMode::Flinching);
    assert_eq!(report.cues, vec![PlayerCue::Hurt { remaining: 90 }]);
    assert!(!machine.dash.active);
    // Knocked back away from a right facing, with the hit recovery hop
    assert_eq!(velocity.x, -tuning.combat.knockback_speed);
    assert_eq!(velocity.y, tuning.movement.recovery_impulse());
}

#[test]
fn test_flinch_knockback_when_facing_left() {
    let tuning = PlayerTuning::default();
    let mut machine = PlayerStateMachine::new(&tuning);
    let mut velocity = Vec2::ZERO;

    let left = InputSnapshot {
        horizontal: -1.0,
        ..Default::default()
    };
    machine.tick(&left, &grounded(), &mut velocity, &tuning, 0.0);
    assert!(machine.aim.mirrored);

    let mut contacts = grounded();
    contacts.impacts.push(10);
    machine.tick(&left, &contacts, &mut velocity, &tuning, DT);

    assert_eq!(velocity.x, tuning.combat.knockback_speed);
}

#[test]
fn test_hit_cancels_running_dash() {
    let tuning = PlayerTuning::default();
    let mut machine = PlayerStateMachine::new(&tuning);
    let mut velocity = Vec2::ZERO;
    let dash = InputSnapshot {
        dash_pressed: true,
        ..Default::default()
    };

    let report = machine.tick(&dash, &grounded(), &mut velocity, &tuning, 0.0);
    assert_eq!(report.mode, PlayerMode::Dashing);

    let mut contacts = grounded();
    contacts.impacts.push(10);
    let report = machine.tick(&InputSnapshot::default(), &contacts, &mut velocity, &tuning, 0.1);

    assert_eq!(report.mode, PlayerMode::Flinching);
    assert!(!machine.dash.is_active(0.1));
}

#[test]
fn test_dash_overrides_normal_movement() {
    let tuning = PlayerTuning::default();
    let mut machine = PlayerStateMachine::new(&tuning);
    let mut velocity = Vec2::new(0.0, 250.0);
    let input = InputSnapshot {
        horizontal: -1.0,
        dash_pressed: true,
        jump_pressed: true,
        fire_held: true,
        ..Default::default()
    };

    let report = machine.tick(&input, &ContactReport::default(), &mut velocity, &tuning, 0.0);

    assert_eq!(report.mode, PlayerMode::Dashing);
    assert_eq!(report.cues, vec![PlayerCue::DashStarted]);
    assert_eq!(velocity, Vec2::new(tuning.movement.dash_speed, 0.0));
    assert!(report.animator.dashing);

    // Input is ignored for the rest of the dash
    let report = machine.tick(&input, &ContactReport::default(), &mut velocity, &tuning, 0.3);
    assert_eq!(report.mode, PlayerMode::Dashing);
    assert!(report.cues.is_empty());
    assert_eq!(velocity.x, tuning.movement.dash_speed);

    let report = machine.tick(&InputSnapshot::default(), &grounded(), &mut velocity, &tuning, 0.6);
    assert_eq!(report.mode, PlayerMode::Normal);
    assert_eq!(velocity.x, 0.0);
}

#[test]
fn test_rejected_dash_falls_through_to_movement() {
    let tuning = PlayerTuning::default();
    let mut machine = PlayerStateMachine::new(&tuning);
    let mut velocity = Vec2::ZERO;
    let dash = InputSnapshot {
        dash_pressed: true,
        ..Default::default()
    };
    machine.tick(&dash, &grounded(), &mut velocity, &tuning, 0.0);

    let input = InputSnapshot {
        horizontal: 1.0,
        dash_pressed: true,
        ..Default::default()
    };
    let report = machine.tick(&input, &grounded(), &mut velocity, &tuning, 0.9);

    assert_eq!(report.mode, PlayerMode::Normal);
    assert_eq!(report.cues, vec![PlayerCue::DashRejected]);
    assert_eq!(velocity.x, tuning.movement.max_speed);
}

// -----------------------------------------------------------------------------
// Contacts and cues
// -----------------------------------------------------------------------------

#[test]
fn test_pickup_is_consumed_at_full_health() {
    let tuning = PlayerTuning::default();
    let mut machine = PlayerStateMachine::new(&tuning);
    let mut velocity = Vec2::ZERO;
    let mut contacts = grounded();
    contacts.pickups.push(PickupContact {
        entity: Entity::PLACEHOLDER,
        amount: 10,
    });

    let report = machine.tick(&InputSnapshot::default(), &contacts, &mut velocity, &tuning, 0.0);

    assert_eq!(
        report.cues,
        vec![PlayerCue::PickupConsumed {
            entity: Entity::PLACEHOLDER,
            healed: 0,
        }]
    );
    assert_eq!(machine.combat.health, tuning.combat.max_health);
}

#[test]
fn test_pickup_heals_before_damage_lands() {
    let tuning = PlayerTuning::default();
    let mut machine = PlayerStateMachine::new(&tuning);
    machine.combat.health = 10;
    let mut velocity = Vec2::ZERO;
    let mut contacts = grounded();
    contacts.pickups.push(PickupContact {
        entity: Entity::PLACEHOLDER,
        amount: 10,
    });
    contacts.impacts.push(15);

    let report = machine.tick(&InputSnapshot::default(), &contacts, &mut velocity, &tuning, 0.0);

    assert_eq!(machine.combat.health, 5);
    assert!(!report.cues.contains(&PlayerCue::Died));
}

#[test]
fn test_persistent_overlap_hurts_again_after_invincibility() {
    let tuning = PlayerTuning::default();
    let mut machine = PlayerStateMachine::new(&tuning);
    let mut velocity = Vec2::ZERO;
    let mut contacts = grounded();
    contacts.start_touching(Entity::PLACEHOLDER, 10);

    let mut hurts = 0;
    let mut now = 0.0;
    while now < 1.0 {
        let report = machine.tick(&InputSnapshot::default(), &contacts, &mut velocity, &tuning, now);
        hurts += count_cues(&report.cues, |cue| matches!(cue, PlayerCue::Hurt { .. }));
        now += DT;
    }

    // Each hit opens a 0.6s window, so a second of overlap lands two hits
    assert_eq!(hurts, 2);
    assert_eq!(machine.combat.health, 80);
}

#[test]
fn test_death_cue_fires_once() {
    let tuning = PlayerTuning::default();
    let mut machine = PlayerStateMachine::new(&tuning);
    let mut velocity = Vec2::ZERO;
    let mut contacts = grounded();
    contacts.start_touching(Entity::PLACEHOLDER, 60);

    let mut deaths = 0;
    for tick in 0..200 {
        let report = machine.tick(
            &InputSnapshot::default(),
            &contacts,
            &mut velocity,
            &tuning,
            tick as f32 * DT,
        );
        deaths += count_cues(&report.cues, |cue| *cue == PlayerCue::Died);
    }

    assert_eq!(deaths, 1);
    assert!(machine.combat.dead);
    assert_eq!(machine.combat.health, 0);
}

#[test]
fn test_fire_respects_cooldown() {
    let tuning = PlayerTuning::default();
    let mut machine = PlayerStateMachine::new(&tuning);
    let mut velocity = Vec2::ZERO;
    let input = InputSnapshot {
        fire_held: true,
        ..Default::default()
    };

    let mut shots = Vec::new();
    for now in [0.0, 0.1, 0.2, 0.3, 0.45] {
        let report = machine.tick(&input, &grounded(), &mut velocity, &tuning, now);
        if report
            .cues
            .iter()
            .any(|cue| matches!(cue, PlayerCue::Fire { .. }))
        {
            shots.push(now);
        }
    }

    assert_eq!(shots, vec![0.0, 0.2, 0.45]);
}

#[test]
fn test_fire_uses_crosshair_placement() {
    let tuning = PlayerTuning::default();
    let mut machine = PlayerStateMachine::new(&tuning);
    let mut velocity = Vec2::ZERO;
    let input = InputSnapshot {
        vertical: 1.0,
        fire_held: true,
        ..Default::default()
    };

    let report = machine.tick(&input, &grounded(), &mut velocity, &tuning, 0.0);

    assert_eq!(
        report.cues,
        vec![PlayerCue::Fire {
            offset: Vec2::new(0.0, tuning.aim.shot_spawn_distance),
            rotation_degrees: 90.0,
        }]
    );
}

#[test]
fn test_jump_cue_and_animator_params() {
    let tuning = PlayerTuning::default();
    let mut machine = PlayerStateMachine::new(&tuning);
    let mut velocity = Vec2::ZERO;
    let input = InputSnapshot {
        horizontal: 1.0,
        jump_pressed: true,
        ..Default::default()
    };

    let report = machine.tick(&input, &grounded(), &mut velocity, &tuning, 0.0);

    assert_eq!(report.cues, vec![PlayerCue::Jump(JumpKind::Ground)]);
    assert_eq!(report.animator.direction, 0);
    assert!(report.animator.grounded);
    assert_eq!(report.animator.normalized_horizontal_speed, 1.0);
}

#[test]
fn test_wall_behind_player_leaves_movement_alone() {
    let tuning = PlayerTuning::default();
    let mut machine = PlayerStateMachine::new(&tuning);
    let mut velocity = Vec2::ZERO;
    let contacts = ContactReport {
        wall: WallContact::Left,
        ..Default::default()
    };
    let input = InputSnapshot {
        horizontal: 1.0,
        jump_pressed: true,
        ..Default::default()
    };

    let report = machine.tick(&input, &contacts, &mut velocity, &tuning, 0.0);

    assert_eq!(report.cues, vec![PlayerCue::Jump(JumpKind::Air { count: 1 })]);
    assert_eq!(velocity.x, tuning.movement.max_speed);
    assert_eq!(machine.aim.facing, Facing::Right);
    assert!(!report.animator.sliding);

    let holding = InputSnapshot {
        horizontal: 1.0,
        ..Default::default()
    };
    machine.tick(&holding, &contacts, &mut velocity, &tuning, 0.25);
    assert_eq!(velocity.x, tuning.movement.max_speed);
}

#[test]
fn test_pressing_into_wall_slides_and_looks_away() {
    let tuning = PlayerTuning::default();
    let mut machine = PlayerStateMachine::new(&tuning);
    let mut velocity = Vec2::ZERO;
    let contacts = ContactReport {
        wall: WallContact::Right,
        ..Default::default()
    };
    let holding = InputSnapshot {
        horizontal: 1.0,
        ..Default::default()
    };

    let report = machine.tick(&holding, &contacts, &mut velocity, &tuning, 0.0);

    assert!(report.animator.sliding);
    assert_eq!(machine.aim.facing, Facing::Left);

    let jump = InputSnapshot {
        horizontal: 1.0,
        jump_pressed: true,
        ..Default::default()
    };
    let report = machine.tick(&jump, &contacts, &mut velocity, &tuning, DT);

    assert_eq!(
        report.cues,
        vec![PlayerCue::Jump(JumpKind::Wall { pushed_left: true })]
    );
    assert_eq!(velocity.x, -tuning.movement.max_speed);
    assert_eq!(machine.aim.facing, Facing::Left);
}

// -----------------------------------------------------------------------------
// Randomized tick sequences
// -----------------------------------------------------------------------------

fn random_input(rng: &mut ChaCha8Rng) -> InputSnapshot {
    let axis = |rng: &mut ChaCha8Rng| -> f32 {
        match rng.random_range(0..4) {
            0 => -1.0,
            1 => 1.0,
            2 => rng.random_range(-1.0..1.0),
            _ => 0.0,
        }
    };
    InputSnapshot {
        horizontal: axis(rng),
        vertical: axis(rng),
        aim_up: rng.random_bool(0.1),
        aim_down: rng.random_bool(0.1),
        fire_held: rng.random_bool(0.3),
        jump_pressed: rng.random_bool(0.1),
        jump_released: rng.random_bool(0.1),
        dash_pressed: rng.random_bool(0.05),
    }
}

fn random_contacts(rng: &mut ChaCha8Rng, report: &mut ContactReport) {
    report.grounded = rng.random_bool(0.5);
    report.wall = match rng.random_range(0..5) {
        0 => WallContact::Left,
        1 => WallContact::Right,
        _ => WallContact::None,
    };
    if rng.random_bool(0.02) {
        report.impacts.push(rng.random_range(1..40));
    }
    if rng.random_bool(0.02) {
        report.pickups.push(PickupContact {
            entity: Entity::PLACEHOLDER,
            amount: rng.random_range(1..30),
        });
    }
    if rng.random_bool(0.01) {
        report.start_touching(Entity::PLACEHOLDER, rng.random_range(1..20));
    }
    if rng.random_bool(0.05) {
        report.stop_touching(Entity::PLACEHOLDER);
    }
}

#[test]
fn test_random_ticks_hold_invariants() {
    let tuning = PlayerTuning::default();

    for seed in 0..8u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut machine = PlayerStateMachine::new(&tuning);
        let mut contacts = ContactReport::default();
        let mut velocity = Vec2::ZERO;
        let mut last_dash_start: Option<f32> = None;
        let mut deaths_this_life = 0;
        let mut now = 0.0_f32;

        for _ in 0..5000 {
            let input = random_input(&mut rng);
            random_contacts(&mut rng, &mut contacts);

            let report = machine.tick(&input, &contacts, &mut velocity, &tuning, now);
            contacts.end_tick();

            let combat = &machine.combat;
            assert!(combat.health >= 0 && combat.health <= combat.max_health);
            assert!(combat.flinching_until <= combat.invincible_until);
            assert!(Facing::ALL.contains(&machine.aim.facing));
            if machine.movement.grounded {
                assert_eq!(machine.movement.air_jumps_used, 0);
            }
            assert!(machine.movement.air_jumps_used <= tuning.movement.air_jump_budget());

            if report.mode == PlayerMode::Flinching {
                assert!(!report.cues.iter().any(|cue| matches!(
                    cue,
                    PlayerCue::DashStarted | PlayerCue::Jump(_) | PlayerCue::Fire { .. }
                )));
            }

            if report.cues.contains(&PlayerCue::DashStarted) {
                if let Some(last) = last_dash_start {
                    assert!(now - last >= tuning.movement.dash_cool_down - 1e-3);
                }
                last_dash_start = Some(now);
            }

            deaths_this_life += count_cues(&report.cues, |cue| *cue == PlayerCue::Died);
            assert!(deaths_this_life <= 1);

            if machine.combat.dead {
                // Level reload hands out a fresh player
                machine = PlayerStateMachine::new(&tuning);
                contacts = ContactReport::default();
                last_dash_start = None;
                deaths_this_life = 0;
            }

            now += DT;
        }
    }
}
