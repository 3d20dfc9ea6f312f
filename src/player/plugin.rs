//! Player plugin wiring the vehicle and chase camera systems.
use bevy::prelude::*;

use crate::{
    mission::MissionSet,
    player::systems::{drive_vehicle, follow_vehicle, reset_vehicle_on_restart, spawn_vehicle},
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_vehicle).add_systems(
            Update,
            (
                drive_vehicle.before(MissionSet),
                reset_vehicle_on_restart.after(MissionSet),
                follow_vehicle
                    .after(drive_vehicle)
                    .after(reset_vehicle_on_restart),
            ),
        );
    }
}
