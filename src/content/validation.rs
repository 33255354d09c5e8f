//! Validation for loaded tuning values.

use crate::player::PlayerTuning;

/// A tuning value that was out of range and has been clamped.
#[derive(Debug)]
pub struct TuningWarning {
    pub field: &'static str,
    pub value: f32,
    pub clamped_to: f32,
}

impl std::fmt::Display for TuningWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' was {} and has been clamped to {}",
            self.field, self.value, self.clamped_to
        )
    }
}

/// Helper macro for clamping a field to a lower bound
macro_rules! clamp_min {
    ($warnings:expr, $value:expr, $min:expr, $field:expr) => {
        if !($value >= $min) {
            $warnings.push(TuningWarning {
                field: $field,
                value: $value as f32,
                clamped_to: $min as f32,
            });
            $value = $min;
        }
    };
}

/// Clamp negative (or NaN) durations, speeds and amounts in place.
/// Returns one warning per clamped field, empty if everything was in range.
pub fn sanitize_tuning(tuning: &mut PlayerTuning) -> Vec<TuningWarning> {
    let mut warnings = Vec::new();

    let movement = &mut tuning.movement;
    clamp_min!(warnings, movement.max_speed, 0.0, "movement.max_speed");
    clamp_min!(
        warnings,
        movement.jump_take_off_speed,
        0.0,
        "movement.jump_take_off_speed"
    );
    clamp_min!(warnings, movement.wall_jump_time, 0.0, "movement.wall_jump_time");
    clamp_min!(warnings, movement.dash_speed, 0.0, "movement.dash_speed");
    clamp_min!(warnings, movement.dash_time, 0.0, "movement.dash_time");
    clamp_min!(warnings, movement.dash_cool_down, 0.0, "movement.dash_cool_down");

    let combat = &mut tuning.combat;
    clamp_min!(warnings, combat.max_health, 1, "combat.max_health");
    clamp_min!(warnings, combat.knockback_time, 0.0, "combat.knockback_time");
    clamp_min!(warnings, combat.recover_time, 0.0, "combat.recover_time");
    clamp_min!(warnings, combat.knockback_speed, 0.0, "combat.knockback_speed");
    clamp_min!(warnings, combat.contact_damage, 0, "combat.contact_damage");
    clamp_min!(warnings, combat.pickup_heal, 0, "combat.pickup_heal");

    let aim = &mut tuning.aim;
    clamp_min!(warnings, aim.shot_spawn_distance, 0.0, "aim.shot_spawn_distance");
    clamp_min!(warnings, aim.crouch_shot, 0.0, "aim.crouch_shot");

    let weapon = &mut tuning.weapon;
    clamp_min!(warnings, weapon.shot_cooldown, 0.0, "weapon.shot_cooldown");
    clamp_min!(warnings, weapon.projectile_speed, 0.0, "weapon.projectile_speed");
    clamp_min!(
        warnings,
        weapon.projectile_lifetime,
        0.0,
        "weapon.projectile_lifetime"
    );

    warnings
}
