// src/ui/hud/components.rs
//
// Components for the mission stats panel and the status banner.

use bevy::prelude::*;

use crate::mission::types::{format_clock, GameStatus, StatsSnapshot};

/// Which stat a HUD text entity displays.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudField {
    Objective,
    Restaurant,
    House,
    Deliveries,
    Score,
    Level,
    Timer,
}

impl HudField {
    pub const ALL: [HudField; 7] = [
        HudField::Objective,
        HudField::Restaurant,
        HudField::House,
        HudField::Deliveries,
        HudField::Score,
        HudField::Level,
        HudField::Timer,
    ];

    /// Text shown for this field given the latest snapshot.
    pub fn render(self, snapshot: &StatsSnapshot) -> String {
        match self {
            Self::Objective => snapshot.objective(),
            Self::Restaurant => format!(
                "Restaurant: {}",
                snapshot.restaurant_name.as_deref().unwrap_or("None")
            ),
            Self::House => format!(
                "House: {}",
                snapshot.house_name.as_deref().unwrap_or("None")
            ),
            Self::Deliveries => format!(
                "Deliveries: {}/{}",
                snapshot.deliveries, snapshot.delivery_goal
            ),
            Self::Score => format!("Score: {}", snapshot.score),
            Self::Level => format!("Level: {}", snapshot.level),
            Self::Timer => format!(
                "Time: {} / {}",
                format_clock(snapshot.remaining_seconds),
                format_clock(snapshot.time_limit)
            ),
        }
    }
}

/// Marker for the centred banner announcing idle, paused and final states.
#[derive(Component, Debug, Default)]
pub struct StatusBanner;

/// Banner text for the current status; `None` while the mission is running.
pub fn banner_text(snapshot: &StatsSnapshot) -> Option<String> {
    match snapshot.status {
        GameStatus::Running => None,
        GameStatus::Idle => Some(
            "PARCEL DASH\nDeliver the orders before time runs out.\nPress Enter to start".into(),
        ),
        GameStatus::Paused => Some(format!(
            "PAUSED\nDeliveries: {}  Score: {}  Time: {}\nEsc to resume, R to restart",
            snapshot.deliveries,
            snapshot.score,
            format_clock(snapshot.elapsed_seconds)
        )),
        GameStatus::WonTerminal => Some(format!(
            "MISSION COMPLETE\n{} deliveries in {}  Score: {}\nPress R to play again",
            snapshot.deliveries,
            format_clock(snapshot.elapsed_seconds),
            snapshot.score
        )),
        GameStatus::LostTerminal => Some(format!(
            "TIME'S UP\n{}/{} deliveries  Score: {}\nPress R to restart",
            snapshot.deliveries, snapshot.delivery_goal, snapshot.score
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(status: GameStatus) -> StatsSnapshot {
        StatsSnapshot {
            score: 450,
            deliveries: 3,
            delivery_goal: 5,
            level: 2,
            elapsed_seconds: 75,
            remaining_seconds: 105,
            time_limit: 180,
            carrying: false,
            status,
            restaurant_name: Some("Central Kitchen".into()),
            house_name: None,
        }
    }

    #[test]
    fn fields_render_current_stats() {
        let running = snapshot(GameStatus::Running);
        assert_eq!(HudField::Deliveries.render(&running), "Deliveries: 3/5");
        assert_eq!(HudField::Timer.render(&running), "Time: 01:45 / 03:00");
        assert_eq!(HudField::House.render(&running), "House: None");
        assert_eq!(
            HudField::Objective.render(&running),
            "Pick up from Central Kitchen"
        );
    }

    #[test]
    fn banner_only_hidden_while_running() {
        assert!(banner_text(&snapshot(GameStatus::Running)).is_none());
        assert!(banner_text(&snapshot(GameStatus::Paused))
            .unwrap()
            .contains("Time: 01:15"));
        assert!(banner_text(&snapshot(GameStatus::LostTerminal))
            .unwrap()
            .contains("3/5"));
        assert!(banner_text(&snapshot(GameStatus::Idle)).is_some());
    }
}
