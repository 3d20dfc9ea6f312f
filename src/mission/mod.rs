//! Delivery mission: order generation, pickup/delivery, scoring, levels and the countdown.
pub mod config;
pub mod controller;
pub mod errors;
pub mod events;
pub mod host;
pub mod plugin;
pub mod schedule;
pub mod selection;
pub mod systems;
pub mod types;

pub use config::MissionSettings;
pub use controller::MissionController;
pub use errors::MissionConfigError;
pub use events::{MissionNotice, MissionRestarted};
pub use plugin::{MissionPlugin, MissionSet};
pub use systems::{MissionBoard, MissionState};
