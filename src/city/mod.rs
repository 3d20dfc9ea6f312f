//! City module housing the ground, lighting and delivery sites.
pub mod components;
pub mod layout;
pub mod plugin;
pub mod systems;

pub use layout::CityLayout;
pub use plugin::CityPlugin;
