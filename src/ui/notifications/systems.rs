// src/ui/notifications/systems.rs
//
// Systems for spawning, fading, and despawning mission toasts.

use bevy::prelude::*;

use crate::mission::{types::Severity, MissionNotice};

use super::components::{NotificationSettings, NotificationStack, NotificationToast};

const TEXT_COLOR: Color = Color::WHITE;
const TOAST_ALPHA: f32 = 0.92;

/// Background colour for a toast of the given severity.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::srgba(0.15, 0.35, 0.7, TOAST_ALPHA),
        Severity::Success => Color::srgba(0.1, 0.55, 0.3, TOAST_ALPHA),
        Severity::Warning => Color::srgba(0.75, 0.45, 0.05, TOAST_ALPHA),
    }
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "i",
        Severity::Success => "+",
        Severity::Warning => "!",
    }
}

/// Spawns the empty column that toasts are stacked into (top-right corner).
pub fn spawn_notification_stack(mut commands: Commands, settings: Res<NotificationSettings>) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(settings.top_offset),
            right: Val::Px(settings.right_offset),
            width: Val::Px(settings.toast_width),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(8.0),
            ..default()
        },
        NotificationStack,
        Name::new("Notification Stack"),
    ));
}

/// Turns each mission notice into a toast, trimming the oldest beyond the cap.
pub fn spawn_notification_toasts(
    mut commands: Commands,
    settings: Res<NotificationSettings>,
    mut notices: MessageReader<MissionNotice>,
    stack: Query<Entity, With<NotificationStack>>,
    children: Query<&Children, With<NotificationStack>>,
) {
    let Ok(stack) = stack.single() else {
        notices.clear();
        return;
    };

    let mut live: Vec<Entity> = children
        .get(stack)
        .map(|children| children.to_vec())
        .unwrap_or_default();

    for notice in notices.read() {
        info!("[{:?}] {}", notice.severity, notice.message);

        let toast = commands
            .spawn((
                Node {
                    width: Val::Percent(100.0),
                    padding: UiRect::all(Val::Px(10.0)),
                    column_gap: Val::Px(8.0),
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(severity_color(notice.severity)),
                NotificationToast::new(
                    notice.severity,
                    settings.lifetime_seconds,
                    settings.fade_seconds,
                ),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(severity_icon(notice.severity)),
                    TextFont {
                        font_size: settings.font_size + 2.0,
                        ..default()
                    },
                    TextColor(TEXT_COLOR),
                ));
                parent.spawn((
                    Text::new(notice.message.clone()),
                    TextFont {
                        font_size: settings.font_size,
                        ..default()
                    },
                    TextColor(TEXT_COLOR),
                ));
            })
            .id();
        commands.entity(stack).add_child(toast);
        live.push(toast);
    }

    while live.len() > settings.max_visible {
        let oldest = live.remove(0);
        commands.entity(oldest).try_despawn();
    }
}

/// Ticks toast lifetimes, fades their backgrounds, and despawns expired ones.
pub fn update_notification_toasts(
    mut commands: Commands,
    time: Res<Time>,
    mut toasts: Query<(Entity, &mut NotificationToast, &mut BackgroundColor)>,
) {
    for (entity, mut toast, mut background) in toasts.iter_mut() {
        toast.tick(time.delta());

        if toast.is_finished() {
            commands.entity(entity).despawn();
            continue;
        }

        let alpha = toast.fade_alpha() * TOAST_ALPHA;
        background.0 = severity_color(toast.severity()).with_alpha(alpha);
    }
}
