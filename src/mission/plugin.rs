//! Mission plugin wiring the controller, its deferred queue and driving systems.
use bevy::prelude::*;

use crate::core::ClockSet;

use super::{
    controller::MissionController,
    events::{MissionNotice, MissionRestarted},
    schedule::DeferredQueue,
    systems::{
        advance_mission_timer, handle_mission_input, run_deferred_mission_tasks, MissionBoard,
        MissionState,
    },
};

/// Systems that mutate mission state; readers should run after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MissionSet;

pub struct MissionPlugin {
    controller: MissionController,
}

impl MissionPlugin {
    pub fn new(controller: MissionController) -> Self {
        Self { controller }
    }
}

impl Plugin for MissionPlugin {
    fn build(&self, app: &mut App) {
        let settings = self.controller.settings();
        info!(
            "MissionPlugin registered: {} deliveries in {}s, pickup radius {:.1}, hint radius {:.1}",
            settings.delivery_goal,
            settings.time_limit_seconds,
            settings.pickup_radius,
            settings.hint_radius
        );

        app.insert_resource(MissionBoard {
            snapshot: self.controller.snapshot(),
        })
        .insert_resource(MissionState(self.controller.clone()))
        .init_resource::<DeferredQueue>()
        .add_message::<MissionNotice>()
        .add_message::<MissionRestarted>()
        .add_systems(
            Update,
            (
                handle_mission_input,
                advance_mission_timer,
                run_deferred_mission_tasks,
            )
                .chain()
                .in_set(MissionSet)
                .after(ClockSet),
        );
    }
}
