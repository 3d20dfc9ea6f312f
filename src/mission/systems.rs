//! Systems that drive the mission controller from Bevy input, time and messages.
use std::time::Duration;

use bevy::prelude::*;

use crate::{core::SimulationClock, player::components::Vehicle};

use super::{
    controller::MissionController,
    events::{MissionNotice, MissionRestarted},
    host::MissionHost,
    schedule::{DeferredQueue, ScheduledAction, Scheduler, TaskHandle},
    types::{GameStatus, Severity, StatsSnapshot},
};

/// Resource wrapping the controller so systems can reach it.
#[derive(Resource, Deref, DerefMut)]
pub struct MissionState(pub MissionController);

/// Latest stats published by the controller, read by the HUD.
#[derive(Resource, Debug, Clone)]
pub struct MissionBoard {
    pub snapshot: StatsSnapshot,
}

/// Adapts Bevy system parameters to the controller's host interface.
struct BevyMissionHost<'a, 'w> {
    player: Option<Vec3>,
    notices: &'a mut MessageWriter<'w, MissionNotice>,
    board: &'a mut MissionBoard,
    queue: &'a mut DeferredQueue,
}

impl Scheduler for BevyMissionHost<'_, '_> {
    fn schedule_once(&mut self, delay: Duration, action: ScheduledAction) -> TaskHandle {
        self.queue.schedule_once(delay, action)
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.queue.cancel(handle)
    }
}

impl MissionHost for BevyMissionHost<'_, '_> {
    fn player_position(&self) -> Option<Vec3> {
        self.player
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        debug!(target: "mission", "[{:?}] {}", severity, message);
        self.notices.write(MissionNotice::new(message, severity));
    }

    fn stats_changed(&mut self, snapshot: &StatsSnapshot) {
        self.board.snapshot = snapshot.clone();
    }
}

/// Maps keyboard input onto mission transitions.
#[allow(clippy::too_many_arguments)]
pub fn handle_mission_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    vehicle: Query<&Transform, With<Vehicle>>,
    mut mission: ResMut<MissionState>,
    mut queue: ResMut<DeferredQueue>,
    mut board: ResMut<MissionBoard>,
    mut clock: ResMut<SimulationClock>,
    mut notices: MessageWriter<MissionNotice>,
    mut restarted: MessageWriter<MissionRestarted>,
) {
    let mut host = BevyMissionHost {
        player: vehicle.single().ok().map(|transform| transform.translation),
        notices: &mut notices,
        board: &mut board,
        queue: &mut queue,
    };

    let status = mission.status();
    let begin = (status == GameStatus::Idle && keyboard.just_pressed(KeyCode::Enter))
        || keyboard.just_pressed(KeyCode::KeyR);
    if begin {
        let began = if status == GameStatus::Idle {
            mission.start(&mut host)
        } else {
            mission.reset(&mut host)
        };
        if began {
            clock.realign_seconds();
            restarted.write(MissionRestarted);
        }
        return;
    }

    if keyboard.just_pressed(KeyCode::Escape) || keyboard.just_pressed(KeyCode::KeyP) {
        mission.toggle_pause(&mut host);
    }

    if keyboard.just_pressed(KeyCode::Space) {
        mission.interact(&mut host);
    }
}

/// Feeds each completed game second into the mission countdown.
pub fn advance_mission_timer(
    clock: Res<SimulationClock>,
    mut mission: ResMut<MissionState>,
    mut queue: ResMut<DeferredQueue>,
    mut board: ResMut<MissionBoard>,
    mut notices: MessageWriter<MissionNotice>,
) {
    let seconds = clock.seconds_this_frame();
    if seconds == 0 {
        return;
    }

    let mut host = BevyMissionHost {
        player: None,
        notices: &mut notices,
        board: &mut board,
        queue: &mut queue,
    };
    for _ in 0..seconds {
        mission.tick(&mut host);
    }
}

/// Releases due deferred calls back into the controller.
pub fn run_deferred_mission_tasks(
    clock: Res<SimulationClock>,
    mut mission: ResMut<MissionState>,
    mut queue: ResMut<DeferredQueue>,
    mut board: ResMut<MissionBoard>,
    mut notices: MessageWriter<MissionNotice>,
) {
    let due = queue.advance(clock.last_scaled_delta());
    if due.is_empty() {
        return;
    }

    let mut host = BevyMissionHost {
        player: None,
        notices: &mut notices,
        board: &mut board,
        queue: &mut queue,
    };
    for action in due {
        mission.fire(action, &mut host);
    }
}
