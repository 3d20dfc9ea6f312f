//! Components used by the city module.
use bevy::prelude::*;

use crate::mission::types::SiteId;

/// Floating beacon above a building, shown while that building is an order target.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteBeacon {
    pub id: SiteId,
}
