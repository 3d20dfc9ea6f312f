// src/ui/notifications/components.rs
//
// Components and resources for the toast notification stack.

use bevy::prelude::*;

use crate::mission::types::Severity;

/// Marker for the column node that holds every toast.
#[derive(Component, Debug, Default)]
pub struct NotificationStack;

/// A single toast. Despawns itself once its lifetime runs out.
#[derive(Component, Debug)]
pub struct NotificationToast {
    severity: Severity,

    /// The lifetime timer. When it expires, the toast despawns.
    lifetime: Timer,

    /// Duration of fade-out effect (stored for fade calculation).
    fade_duration: f32,
}

impl NotificationToast {
    pub fn new(severity: Severity, lifetime_secs: f32, fade_duration: f32) -> Self {
        Self {
            severity,
            lifetime: Timer::from_seconds(lifetime_secs, TimerMode::Once),
            fade_duration,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        self.lifetime.tick(delta);
    }

    pub fn is_finished(&self) -> bool {
        self.lifetime.is_finished()
    }

    /// Calculate the alpha fade value (1.0 = fully visible, 0.0 = transparent).
    ///
    /// Fades out during the final `fade_duration` seconds of lifetime.
    pub fn fade_alpha(&self) -> f32 {
        let remaining = self.lifetime.remaining_secs();
        if self.fade_duration > 0.0 && remaining < self.fade_duration {
            remaining / self.fade_duration
        } else {
            1.0
        }
    }
}

/// Resource containing settings for toast behavior.
#[derive(Resource, Debug)]
pub struct NotificationSettings {
    /// How long toasts remain visible (seconds).
    pub lifetime_seconds: f32,

    /// Duration of fade-out animation (seconds).
    pub fade_seconds: f32,

    /// Oldest toasts are dropped beyond this count.
    pub max_visible: usize,

    /// Toast width (pixels).
    pub toast_width: f32,

    /// Offset from top edge of screen (pixels).
    pub top_offset: f32,

    /// Offset from right edge of screen (pixels).
    pub right_offset: f32,

    /// Font size for toast text (points).
    pub font_size: f32,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            lifetime_seconds: 3.0,
            fade_seconds: 0.3,
            max_visible: 4,
            toast_width: 380.0,
            top_offset: 20.0,
            right_offset: 20.0,
            font_size: 16.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn toast_fades_during_final_stretch() {
        let mut toast = NotificationToast::new(Severity::Info, 3.0, 0.5);
        assert_eq!(toast.fade_alpha(), 1.0);

        toast.tick(Duration::from_millis(2_750));
        let alpha = toast.fade_alpha();
        assert!(alpha > 0.4 && alpha < 0.6, "alpha was {alpha}");
        assert!(!toast.is_finished());

        toast.tick(Duration::from_millis(300));
        assert!(toast.is_finished());
        assert_eq!(toast.severity(), Severity::Info);
    }
}
