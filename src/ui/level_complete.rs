//! UI domain: level-complete overlay and the advance prompt.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{AdvanceLevelEvent, LevelCompleteEvent};

/// Marker for the level-complete overlay
#[derive(Component)]
pub struct LevelCompleteUI;

/// Marker for the continue button on the overlay
#[derive(Component)]
pub struct ContinueButton;

pub(crate) fn show_level_complete(
    mut commands: Commands,
    mut complete_events: MessageReader<LevelCompleteEvent>,
    existing: Query<(), With<LevelCompleteUI>>,
) {
    let Some(event) = complete_events.read().last() else {
        return;
    };
    if !existing.is_empty() {
        return;
    }
    spawn_level_complete_screen(&mut commands, event.level_index);
}

fn spawn_level_complete_screen(commands: &mut Commands, level_index: u32) {
    commands
        .spawn((
            LevelCompleteUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("LEVEL {} CLEAR", level_index + 1)),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.8, 0.3)),
                Node {
                    margin: UiRect::bottom(Val::Px(48.0)),
                    ..default()
                },
            ));

            parent
                .spawn((
                    ContinueButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(16.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
                    BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
                ))
                .with_child((
                    Text::new("NEXT LEVEL"),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));

            parent.spawn((
                Text::new("Press [Enter] or click to continue"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 0.4, 0.45)),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn handle_continue(
    keyboard: Res<ButtonInput<KeyCode>>,
    button_query: Query<&Interaction, (With<ContinueButton>, Changed<Interaction>)>,
    mut advance_events: MessageWriter<AdvanceLevelEvent>,
) {
    let should_continue = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || button_query
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);

    if should_continue {
        advance_events.write(AdvanceLevelEvent);
    }
}

pub(crate) fn cleanup_level_complete(
    mut commands: Commands,
    overlays: Query<Entity, With<LevelCompleteUI>>,
) {
    for entity in &overlays {
        commands.entity(entity).despawn();
    }
}
