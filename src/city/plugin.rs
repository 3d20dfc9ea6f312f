//! CityPlugin spawns the ground, the sun and every restaurant and house.
use bevy::prelude::*;

use crate::{
    city::{
        layout::CityLayout,
        systems::{spawn_city_environment, spawn_sites, update_site_beacons},
    },
    mission::MissionSet,
};

pub struct CityPlugin {
    layout: CityLayout,
}

impl CityPlugin {
    pub fn new(layout: CityLayout) -> Self {
        Self { layout }
    }
}

impl Plugin for CityPlugin {
    fn build(&self, app: &mut App) {
        info!(
            "City configured with {} site(s)",
            self.layout.placements().len()
        );

        app.insert_resource(self.layout.clone())
            .add_systems(Startup, (spawn_city_environment, spawn_sites))
            .add_systems(Update, update_site_beacons.after(MissionSet));
    }
}
