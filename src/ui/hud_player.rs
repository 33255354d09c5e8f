//! UI domain: player HUD health bar.

use bevy::prelude::*;

use crate::core::LevelProgress;
use crate::movement::Player;
use crate::player::PlayerStateMachine;

pub(crate) const PLAYER_HEALTHBAR_WIDTH: f32 = 200.0;
pub(crate) const PLAYER_HEALTHBAR_HEIGHT: f32 = 20.0;
pub(crate) const PLAYER_HEALTHBAR_PADDING: f32 = 16.0;

/// Marker for the player's HUD health bar container
#[derive(Component)]
pub struct PlayerHealthBarUI;

/// Marker for the player's health bar fill element
#[derive(Component)]
pub struct PlayerHealthBarFill;

/// Marker for the "level N" label next to the bar
#[derive(Component)]
pub struct LevelLabel;

pub(crate) fn spawn_player_healthbar_ui(mut commands: Commands) {
    commands
        .spawn((
            PlayerHealthBarUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(PLAYER_HEALTHBAR_PADDING),
                top: Val::Px(PLAYER_HEALTHBAR_PADDING),
                width: Val::Px(PLAYER_HEALTHBAR_WIDTH),
                height: Val::Px(PLAYER_HEALTHBAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerHealthBarFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
            ));
        });

    commands.spawn((
        LevelLabel,
        Text::new("Level 1"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.8, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(PLAYER_HEALTHBAR_PADDING * 2.0 + PLAYER_HEALTHBAR_WIDTH),
            top: Val::Px(PLAYER_HEALTHBAR_PADDING),
            ..default()
        },
    ));
}

/// Health fraction to bar colour: green at full, yellow at half, red when low.
pub(crate) fn healthbar_color(percent: f32) -> Color {
    let percent = percent.clamp(0.0, 1.0);
    if percent > 0.5 {
        let t = (percent - 0.5) * 2.0;
        Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
    } else {
        let t = percent * 2.0;
        Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
    }
}

pub(crate) fn update_player_healthbar(
    player_query: Query<&PlayerStateMachine, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<PlayerHealthBarFill>>,
) {
    // No player between a despawn and the rebuild
    let Ok(machine) = player_query.single() else {
        return;
    };

    let percent = machine.combat.percent();
    for (mut node, mut bg_color) in &mut fill_query {
        node.width = Val::Percent(percent * 100.0);
        bg_color.0 = healthbar_color(percent);
    }
}

pub(crate) fn update_level_label(
    progress: Res<LevelProgress>,
    mut labels: Query<&mut Text, With<LevelLabel>>,
) {
    if !progress.is_changed() {
        return;
    }
    for mut text in &mut labels {
        text.0 = format!("Level {}", progress.level_index + 1);
    }
}
