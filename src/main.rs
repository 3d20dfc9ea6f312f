use bevy::prelude::*;

mod city;
mod core;
mod mission;
mod player;
mod ui;

use crate::{
    city::{CityLayout, CityPlugin},
    core::CorePlugin,
    mission::{MissionController, MissionPlugin, MissionSettings},
    player::PlayerPlugin,
    ui::UiPlugin,
};

fn main() -> AppExit {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Parcel Dash".into(),
            ..default()
        }),
        ..default()
    }));

    let settings = MissionSettings::load_or_default();
    let layout = CityLayout::load_or_default();
    let time_scale = settings.time_scale;

    let controller = match MissionController::new(settings, &layout) {
        Ok(controller) => controller,
        Err(err) => {
            error!("Cannot start the delivery mission: {}", err);
            return AppExit::error();
        }
    };

    app.add_plugins((
        CorePlugin::with_time_scale(time_scale),
        CityPlugin::new(layout),
        PlayerPlugin,
        MissionPlugin::new(controller),
        UiPlugin,
    ))
    .run()
}
