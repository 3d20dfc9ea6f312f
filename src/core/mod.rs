//! Core timing shared by every gameplay plugin.
pub mod plugin;

pub use plugin::{ClockSet, CorePlugin, SimulationClock};
