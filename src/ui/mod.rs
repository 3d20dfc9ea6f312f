// src/ui/mod.rs
//
// UI module providing screen-space UI elements for the delivery mission.
//
// Current features:
// - HUD stats panel (objective, order, deliveries, score, level, countdown)
// - Status banner (start, pause, win and loss screens)
// - Toast notifications (top-right corner mission messages)

pub mod hud;
pub mod notifications;
pub mod plugin;

pub use plugin::UiPlugin;
