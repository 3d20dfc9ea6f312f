// src/ui/notifications/mod.rs
//
// Toast notifications for mission messages (top-right corner).

pub mod components;
pub mod systems;
