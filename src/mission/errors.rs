//! Configuration errors raised while building the mission controller.
use std::fmt;

/// Fatal setup problems. Gameplay rejections are never reported through this type.
#[derive(Debug, Clone, PartialEq)]
pub enum MissionConfigError {
    NoRestaurants,
    NoHouses,
    InvalidSetting {
        field: &'static str,
        reason: String,
    },
}

impl MissionConfigError {
    pub fn invalid_setting(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MissionConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRestaurants => write!(f, "city layout defines no restaurants"),
            Self::NoHouses => write!(f, "city layout defines no houses"),
            Self::InvalidSetting { field, reason } => {
                write!(f, "invalid mission setting `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for MissionConfigError {}
