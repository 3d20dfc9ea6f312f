//! Messages the mission plugin emits for the rest of the game.
use bevy::prelude::Message;

use super::types::Severity;

/// Player-facing notification raised by the mission controller.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct MissionNotice {
    pub message: String,
    pub severity: Severity,
}

impl MissionNotice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

/// Fired whenever a fresh mission begins (start or reset).
#[derive(Message, Debug, Clone, Copy)]
pub struct MissionRestarted;
