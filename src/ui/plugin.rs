// src/ui/plugin.rs
//
// UiPlugin coordinates the HUD and toast notification systems.

use bevy::prelude::*;

use crate::mission::MissionSet;

use super::{
    hud::systems::{refresh_hud, refresh_status_banner, spawn_hud},
    notifications::{
        components::NotificationSettings,
        systems::{
            spawn_notification_stack, spawn_notification_toasts, update_notification_toasts,
        },
    },
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        info!("UiPlugin registered");

        app.insert_resource(NotificationSettings::default())
            .add_systems(Startup, (spawn_hud, spawn_notification_stack))
            .add_systems(
                Update,
                (
                    refresh_hud,
                    refresh_status_banner,
                    update_notification_toasts,
                    spawn_notification_toasts.after(update_notification_toasts),
                )
                    .after(MissionSet),
            );
    }
}
