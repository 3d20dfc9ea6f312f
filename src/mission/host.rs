//! Collaborator seams the mission controller is driven through.
use bevy::math::Vec3;

use super::{
    schedule::Scheduler,
    types::{Severity, Site, SiteKind, StatsSnapshot},
};

/// Source of restaurant and house locations, consulted once at setup.
pub trait SiteDirectory {
    fn sites(&self, kind: SiteKind) -> Vec<Site>;
}

/// Everything the controller needs from its surroundings while running.
pub trait MissionHost: Scheduler {
    /// Current player position, or `None` when the player is not spawned.
    fn player_position(&self) -> Option<Vec3>;

    fn notify(&mut self, message: &str, severity: Severity);

    /// Called after every mutation of mission state.
    fn stats_changed(&mut self, snapshot: &StatsSnapshot);
}
