//! Plain data carried by the delivery mission: sites, orders, score, timer and status.
use std::fmt;

use bevy::math::Vec3;

/// Stable identifier for a restaurant or house in the city layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteId(u32);

impl SiteId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SITE-{:03}", self.0)
    }
}

/// The two kinds of location an order links together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteKind {
    Restaurant,
    House,
}

impl SiteKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::House => "house",
        }
    }
}

/// A named location with an optional world position.
///
/// A site without a position is treated as infinitely far away, so any
/// proximity check against it fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub id: SiteId,
    pub kind: SiteKind,
    pub name: String,
    pub position: Option<Vec3>,
}

impl Site {
    pub fn new(id: SiteId, kind: SiteKind, name: impl Into<String>, position: Option<Vec3>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            position,
        }
    }
}

/// Distance between two optional positions; missing data counts as unreachable.
pub fn distance_between(a: Option<Vec3>, b: Option<Vec3>) -> f32 {
    match (a, b) {
        (Some(a), Some(b)) => a.distance(b),
        _ => f32::INFINITY,
    }
}

/// The restaurant/house pair for the current delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub restaurant: Site,
    pub house: Site,
}

/// Running totals for the session. Never decrease until the mission restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    pub deliveries: u32,
    pub level: u32,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            score: 0,
            deliveries: 0,
            level: 1,
        }
    }
}

/// Countdown state: remaining is always `limit - elapsed`, floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub elapsed_seconds: u32,
    pub remaining_seconds: u32,
}

impl TimerState {
    pub fn new(limit_seconds: u32) -> Self {
        Self {
            elapsed_seconds: 0,
            remaining_seconds: limit_seconds,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Idle,
    Running,
    Paused,
    WonTerminal,
    LostTerminal,
}

impl GameStatus {
    /// Running or Paused: a mission is in progress.
    pub fn is_live(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::WonTerminal => "won",
            Self::LostTerminal => "lost",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity attached to player-facing notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
}

/// How close the countdown is to running out, for HUD colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerUrgency {
    Calm,
    Warning,
    Critical,
}

impl TimerUrgency {
    pub fn from_remaining(remaining_seconds: u32) -> Self {
        if remaining_seconds <= 30 {
            Self::Critical
        } else if remaining_seconds <= 60 {
            Self::Warning
        } else {
            Self::Calm
        }
    }
}

/// Renders a second count as `mm:ss`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Read-only view of the mission handed to the UI after every change.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub score: u32,
    pub deliveries: u32,
    pub delivery_goal: u32,
    pub level: u32,
    pub elapsed_seconds: u32,
    pub remaining_seconds: u32,
    pub time_limit: u32,
    pub carrying: bool,
    pub status: GameStatus,
    pub restaurant_name: Option<String>,
    pub house_name: Option<String>,
}

impl StatsSnapshot {
    /// One-line instruction describing what the player should do next.
    pub fn objective(&self) -> String {
        match self.status {
            GameStatus::Idle => "Press Enter to start your shift".to_string(),
            GameStatus::WonTerminal => "Mission complete!".to_string(),
            GameStatus::LostTerminal => "Press R to restart".to_string(),
            GameStatus::Running | GameStatus::Paused => {
                match (self.carrying, &self.restaurant_name, &self.house_name) {
                    (true, _, Some(house)) => format!("Deliver to {house}"),
                    (false, Some(restaurant), _) => format!("Pick up from {restaurant}"),
                    _ => "Waiting for the next order".to_string(),
                }
            }
        }
    }

    pub fn urgency(&self) -> TimerUrgency {
        TimerUrgency::from_remaining(self.remaining_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_positions_are_infinitely_far() {
        let origin = Some(Vec3::ZERO);
        assert_eq!(distance_between(origin, None), f32::INFINITY);
        assert_eq!(distance_between(None, origin), f32::INFINITY);
        assert_eq!(distance_between(origin, Some(Vec3::new(3.0, 0.0, 4.0))), 5.0);
    }

    #[test]
    fn clock_format_pads_minutes_and_seconds() {
        assert_eq!(format_clock(180), "03:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn urgency_bands_follow_remaining_time() {
        assert_eq!(TimerUrgency::from_remaining(61), TimerUrgency::Calm);
        assert_eq!(TimerUrgency::from_remaining(60), TimerUrgency::Warning);
        assert_eq!(TimerUrgency::from_remaining(30), TimerUrgency::Critical);
    }

    #[test]
    fn objective_tracks_carry_state() {
        let mut snapshot = StatsSnapshot {
            score: 0,
            deliveries: 0,
            delivery_goal: 5,
            level: 1,
            elapsed_seconds: 0,
            remaining_seconds: 180,
            time_limit: 180,
            carrying: false,
            status: GameStatus::Running,
            restaurant_name: Some("Central Kitchen".into()),
            house_name: Some("Smith House".into()),
        };
        assert_eq!(snapshot.objective(), "Pick up from Central Kitchen");

        snapshot.carrying = true;
        assert_eq!(snapshot.objective(), "Deliver to Smith House");

        snapshot.status = GameStatus::LostTerminal;
        assert_eq!(snapshot.objective(), "Press R to restart");
        assert_eq!(GameStatus::WonTerminal.to_string(), "won");
    }
}
