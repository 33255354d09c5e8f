//! Combat domain: tests for damage, recovery windows and healing.

use super::{CombatState, CombatTuning, DamageOutcome};

#[test]
fn test_new_state_starts_full() {
    let state = CombatState::new(100);
    assert_eq!(state.health, 100);
    assert_eq!(state.percent(), 1.0);
    assert!(!state.dead);
    assert!(!state.is_invincible(0.0));
}

#[test]
fn test_max_health_is_at_least_one() {
    let state = CombatState::new(-5);
    assert_eq!(state.max_health, 1);
    assert_eq!(state.health, 1);
}

#[test]
fn test_hit_opens_nested_windows() {
    let tuning = CombatTuning::default();
    let mut state = CombatState::new(100);

    let outcome = state.apply_damage(10, 2.0, &tuning);

    assert_eq!(outcome, DamageOutcome::Hurt { remaining: 90 });
    assert_eq!(state.flinching_until, 2.0 + tuning.knockback_time);
    assert_eq!(
        state.invincible_until,
        2.0 + tuning.knockback_time + tuning.recover_time
    );
    assert!(state.flinching_until <= state.invincible_until);
    assert!(state.is_flinching(2.05));
    assert!(!state.is_flinching(2.2));
    assert!(state.is_invincible(2.2));
    assert!(!state.is_invincible(2.7));
}

#[test]
fn test_invincibility_blocks_damage() {
    let tuning = CombatTuning::default();
    let mut state = CombatState::new(100);

    state.apply_damage(10, 0.0, &tuning);
    let blocked = state.apply_damage(10, 0.3, &tuning);

    assert_eq!(blocked, DamageOutcome::Blocked);
    assert_eq!(state.health, 90);

    let after = state.apply_damage(10, 0.7, &tuning);
    assert_eq!(after, DamageOutcome::Hurt { remaining: 80 });
}

#[test]
fn test_non_positive_damage_is_ignored() {
    let tuning = CombatTuning::default();
    let mut state = CombatState::new(100);

    assert_eq!(state.apply_damage(0, 0.0, &tuning), DamageOutcome::Ignored);
    assert_eq!(state.apply_damage(-10, 0.0, &tuning), DamageOutcome::Ignored);
    assert_eq!(state.health, 100);
    assert!(!state.is_invincible(0.0));
}

#[test]
fn test_lethal_hit_clamps_to_zero() {
    let tuning = CombatTuning::default();
    let mut state = CombatState::new(30);

    assert_eq!(state.apply_damage(500, 0.0, &tuning), DamageOutcome::Died);
    assert_eq!(state.health, 0);
    assert!(state.dead);
}

#[test]
fn test_death_is_reported_once() {
    let tuning = CombatTuning::default();
    let mut state = CombatState::new(10);

    let mut deaths = 0;
    for tick in 0..20 {
        if state.apply_damage(10, tick as f32, &tuning) == DamageOutcome::Died {
            deaths += 1;
        }
    }

    assert_eq!(deaths, 1);
    assert_eq!(state.health, 0);
}

#[test]
fn test_heal_clamps_to_max() {
    let tuning = CombatTuning::default();
    let mut state = CombatState::new(100);
    state.apply_damage(5, 0.0, &tuning);

    assert_eq!(state.heal(10), 5);
    assert_eq!(state.health, 100);
    assert_eq!(state.heal(10), 0);
}

#[test]
fn test_heal_does_nothing_when_dead() {
    let tuning = CombatTuning::default();
    let mut state = CombatState::new(10);
    state.apply_damage(10, 0.0, &tuning);

    assert_eq!(state.heal(50), 0);
    assert_eq!(state.health, 0);
    assert!(state.dead);
}

#[test]
fn test_zero_recovery_tuning_keeps_windows_ordered() {
    let tuning = CombatTuning {
        knockback_time: 0.0,
        recover_time: 0.0,
        ..Default::default()
    };
    let mut state = CombatState::new(100);

    state.apply_damage(10, 1.0, &tuning);

    assert!(state.flinching_until <= state.invincible_until);
    assert!(!state.is_flinching(1.0));
    assert_eq!(state.apply_damage(10, 1.0, &tuning), DamageOutcome::Hurt { remaining: 80 });
}
