// src/ui/hud/mod.rs
//
// Mission stats panel and status banner.

pub mod components;
pub mod systems;
