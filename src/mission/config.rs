//! Mission tuning loaded from `config/mission.toml`.
use std::{fs, path::Path, time::Duration};

use bevy::prelude::*;
use serde::Deserialize;

use super::errors::MissionConfigError;

const CONFIG_PATH: &str = "config/mission.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawMissionConfig {
    #[serde(default)]
    clock: RawClockSection,
    #[serde(default)]
    timer: RawTimerSection,
    #[serde(default)]
    goal: RawGoalSection,
    #[serde(default)]
    scoring: RawScoringSection,
    #[serde(default)]
    proximity: RawProximitySection,
    #[serde(default)]
    schedule: RawScheduleSection,
    #[serde(default)]
    random: RawRandomSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawClockSection {
    time_scale: f32,
}

impl Default for RawClockSection {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawTimerSection {
    limit_seconds: u32,
    warning_thresholds: Vec<u32>,
}

impl Default for RawTimerSection {
    fn default() -> Self {
        Self {
            limit_seconds: 180,
            warning_thresholds: vec![60, 30, 10],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawGoalSection {
    deliveries: u32,
    level_every: u32,
}

impl Default for RawGoalSection {
    fn default() -> Self {
        Self {
            deliveries: 5,
            level_every: 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawScoringSection {
    base_points: u32,
    time_bonus_cap: u32,
    bonus_decay_seconds: u32,
}

impl Default for RawScoringSection {
    fn default() -> Self {
        Self {
            base_points: 100,
            time_bonus_cap: 50,
            bonus_decay_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawProximitySection {
    pickup_radius: f32,
    delivery_radius: f32,
    hint_radius: f32,
}

impl Default for RawProximitySection {
    fn default() -> Self {
        Self {
            pickup_radius: 15.0,
            delivery_radius: 15.0,
            hint_radius: 25.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawScheduleSection {
    new_order_delay_ms: u64,
    destination_hint_delay_ms: u64,
}

impl Default for RawScheduleSection {
    fn default() -> Self {
        Self {
            new_order_delay_ms: 2_000,
            destination_hint_delay_ms: 1_500,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawRandomSection {
    seed: Option<u64>,
}

/// Tunable parameters for the delivery mission.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionSettings {
    pub time_scale: f32,
    pub time_limit_seconds: u32,
    pub warning_thresholds: Vec<u32>,
    pub delivery_goal: u32,
    pub level_every: u32,
    pub base_points: u32,
    pub time_bonus_cap: u32,
    pub bonus_decay_seconds: u32,
    pub pickup_radius: f32,
    pub delivery_radius: f32,
    pub hint_radius: f32,
    pub new_order_delay: Duration,
    pub destination_hint_delay: Duration,
    pub seed: Option<u64>,
}

impl Default for MissionSettings {
    fn default() -> Self {
        RawMissionConfig::default().into()
    }
}

impl MissionSettings {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => Self::from_toml_str(&data).unwrap_or_else(|err| {
                warn!(
                    "Failed to parse {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                Self::default()
            }),
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                Self::default()
            }
        }
    }

    pub fn from_toml_str(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawMissionConfig>(data).map(Into::into)
    }

    /// Rejects combinations that would make the mission unwinnable or ill-defined.
    pub fn validate(&self) -> Result<(), MissionConfigError> {
        if self.time_limit_seconds == 0 {
            return Err(MissionConfigError::invalid_setting(
                "timer.limit_seconds",
                "must be at least one second",
            ));
        }
        if self.delivery_goal == 0 {
            return Err(MissionConfigError::invalid_setting(
                "goal.deliveries",
                "must be positive",
            ));
        }
        if self.level_every == 0 {
            return Err(MissionConfigError::invalid_setting(
                "goal.level_every",
                "must be positive",
            ));
        }
        if self.hint_radius < self.pickup_radius.max(self.delivery_radius) {
            return Err(MissionConfigError::invalid_setting(
                "proximity.hint_radius",
                format!(
                    "{:.1} is smaller than the pickup/delivery radius",
                    self.hint_radius
                ),
            ));
        }
        Ok(())
    }

    /// Bonus awarded for delivering quickly, before the level multiplier.
    pub fn time_bonus(&self, elapsed_seconds: u32) -> u32 {
        let decay = self.bonus_decay_seconds.max(1);
        self.time_bonus_cap.saturating_sub(elapsed_seconds / decay)
    }
}

impl From<RawMissionConfig> for MissionSettings {
    fn from(value: RawMissionConfig) -> Self {
        let proximity = value.proximity;
        let mut warning_thresholds = value.timer.warning_thresholds;
        warning_thresholds.sort_unstable_by(|a, b| b.cmp(a));
        warning_thresholds.dedup();

        Self {
            time_scale: value.clock.time_scale.max(0.001),
            time_limit_seconds: value.timer.limit_seconds,
            warning_thresholds,
            delivery_goal: value.goal.deliveries,
            level_every: value.goal.level_every,
            base_points: value.scoring.base_points,
            time_bonus_cap: value.scoring.time_bonus_cap,
            bonus_decay_seconds: value.scoring.bonus_decay_seconds,
            pickup_radius: proximity.pickup_radius.max(0.0),
            delivery_radius: proximity.delivery_radius.max(0.0),
            hint_radius: proximity.hint_radius.max(0.0),
            new_order_delay: Duration::from_millis(value.schedule.new_order_delay_ms),
            destination_hint_delay: Duration::from_millis(
                value.schedule.destination_hint_delay_ms,
            ),
            seed: value.random.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipping_tuning() {
        let settings = MissionSettings::default();
        assert_eq!(settings.time_limit_seconds, 180);
        assert_eq!(settings.delivery_goal, 5);
        assert_eq!(settings.level_every, 3);
        assert_eq!(settings.warning_thresholds, vec![60, 30, 10]);
        assert_eq!(settings.pickup_radius, 15.0);
        assert_eq!(settings.hint_radius, 25.0);
        assert_eq!(settings.new_order_delay, Duration::from_secs(2));
        assert!(settings.seed.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let settings = MissionSettings::from_toml_str(
            r#"
            [timer]
            limit_seconds = 90
            warning_thresholds = [10, 30, 30]

            [random]
            seed = 42
            "#,
        )
        .expect("valid toml");

        assert_eq!(settings.time_limit_seconds, 90);
        assert_eq!(settings.warning_thresholds, vec![30, 10]);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.delivery_goal, 5);
    }

    #[test]
    fn validation_rejects_degenerate_values() {
        let mut settings = MissionSettings::default();
        settings.delivery_goal = 0;
        assert!(matches!(
            settings.validate(),
            Err(MissionConfigError::InvalidSetting {
                field: "goal.deliveries",
                ..
            })
        ));

        let mut settings = MissionSettings::default();
        settings.hint_radius = 10.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn time_bonus_decays_every_ten_seconds() {
        let settings = MissionSettings::default();
        assert_eq!(settings.time_bonus(0), 50);
        assert_eq!(settings.time_bonus(9), 50);
        assert_eq!(settings.time_bonus(10), 49);
        assert_eq!(settings.time_bonus(125), 38);
        assert_eq!(settings.time_bonus(600), 0);
    }
}
