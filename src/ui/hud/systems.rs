// src/ui/hud/systems.rs
//
// Systems for spawning and refreshing the mission HUD.

use bevy::prelude::*;

use crate::mission::{types::TimerUrgency, MissionBoard};

use super::components::{banner_text, HudField, StatusBanner};

const PANEL_BACKGROUND: Color = Color::srgba(0.05, 0.05, 0.08, 0.8);
const BANNER_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.75);
const TEXT_COLOR: Color = Color::WHITE;
const OBJECTIVE_COLOR: Color = Color::srgb(1.0, 0.9, 0.4); // Yellow/gold

fn urgency_color(urgency: TimerUrgency) -> Color {
    match urgency {
        TimerUrgency::Calm => Color::srgb(0.0, 1.0, 0.53),
        TimerUrgency::Warning => Color::srgb(1.0, 0.67, 0.0),
        TimerUrgency::Critical => Color::srgb(1.0, 0.27, 0.27),
    }
}

/// Spawns the stats panel (top-left) and the hidden status banner (centre).
pub fn spawn_hud(mut commands: Commands, board: Res<MissionBoard>) {
    let snapshot = &board.snapshot;
    let banner_visibility = if banner_text(snapshot).is_some() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(20.0),
                left: Val::Px(20.0),
                padding: UiRect::all(Val::Px(12.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            BackgroundColor(PANEL_BACKGROUND),
            Name::new("Mission HUD"),
        ))
        .with_children(|panel| {
            for field in HudField::ALL {
                let (size, color) = match field {
                    HudField::Objective => (20.0, OBJECTIVE_COLOR),
                    HudField::Timer => (22.0, urgency_color(snapshot.urgency())),
                    _ => (16.0, TEXT_COLOR),
                };
                panel.spawn((
                    Text::new(field.render(snapshot)),
                    TextFont {
                        font_size: size,
                        ..default()
                    },
                    TextColor(color),
                    field,
                ));
            }
        });

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            Name::new("Status Banner Root"),
        ))
        .with_children(|root| {
            root.spawn((
                Node {
                    padding: UiRect::all(Val::Px(24.0)),
                    ..default()
                },
                BackgroundColor(BANNER_BACKGROUND),
                banner_visibility,
                StatusBanner,
                Name::new("Status Banner"),
            ))
            .with_children(|banner| {
                banner.spawn((
                    Text::new(banner_text(snapshot).unwrap_or_default()),
                    TextFont {
                        font_size: 26.0,
                        ..default()
                    },
                    TextColor(TEXT_COLOR),
                ));
            });
        });
}

/// Rewrites HUD text whenever the controller publishes new stats.
pub fn refresh_hud(
    board: Res<MissionBoard>,
    mut fields: Query<(&HudField, &mut Text, &mut TextColor)>,
) {
    if !board.is_changed() {
        return;
    }
    let snapshot = &board.snapshot;

    for (field, mut text, mut color) in fields.iter_mut() {
        let rendered = field.render(snapshot);
        if text.0 != rendered {
            text.0 = rendered;
        }
        if *field == HudField::Timer {
            color.0 = urgency_color(snapshot.urgency());
        }
    }
}

/// Shows the banner for idle, paused and final states and hides it while running.
pub fn refresh_status_banner(
    board: Res<MissionBoard>,
    mut banners: Query<(&mut Visibility, &Children), With<StatusBanner>>,
    mut texts: Query<&mut Text, Without<HudField>>,
) {
    if !board.is_changed() {
        return;
    }

    let message = banner_text(&board.snapshot);
    for (mut visibility, children) in banners.iter_mut() {
        match &message {
            Some(message) => {
                visibility.set_if_neq(Visibility::Inherited);
                for child in children.iter() {
                    if let Ok(mut text) = texts.get_mut(child) {
                        text.0 = message.clone();
                    }
                }
            }
            None => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }
}
