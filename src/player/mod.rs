//! Player module: the delivery vehicle, its controls and the chase camera.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
