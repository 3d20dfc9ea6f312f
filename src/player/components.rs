//! Components for the player's delivery vehicle and its camera.
use bevy::prelude::*;

/// Driving state and tuning for the player vehicle.
#[derive(Component, Debug, Clone)]
pub struct Vehicle {
    /// Signed speed along the facing direction (units per second).
    pub speed: f32,
    pub max_speed: f32,
    pub acceleration: f32,
    /// Fraction of speed kept after one second with no throttle.
    pub drag_per_second: f32,
    /// Turn rate (radians per second).
    pub turn_rate: f32,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            speed: 0.0,
            max_speed: 60.0,
            acceleration: 40.0,
            drag_per_second: 0.3,
            turn_rate: 2.5,
        }
    }
}

impl Vehicle {
    /// Applies throttle (`-1..=1`) and drag over `dt` seconds.
    pub fn apply_throttle(&mut self, throttle: f32, dt: f32) {
        self.speed += throttle * self.acceleration * dt;
        self.speed = self.speed.clamp(-self.max_speed * 0.5, self.max_speed);
        if throttle == 0.0 {
            self.speed *= self.drag_per_second.powf(dt);
        }
        if self.speed.abs() < 0.05 {
            self.speed = 0.0;
        }
    }
}

/// Camera that trails the vehicle at a fixed offset.
#[derive(Component, Debug, Clone)]
pub struct ChaseCamera {
    pub offset: Vec3,
    pub smoothing: f32,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 14.0, 22.0),
            smoothing: 6.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_is_capped_and_reverse_is_half_speed() {
        let mut vehicle = Vehicle::default();
        for _ in 0..200 {
            vehicle.apply_throttle(1.0, 0.1);
        }
        assert_eq!(vehicle.speed, vehicle.max_speed);

        for _ in 0..400 {
            vehicle.apply_throttle(-1.0, 0.1);
        }
        assert_eq!(vehicle.speed, -vehicle.max_speed * 0.5);
    }

    #[test]
    fn drag_brings_vehicle_to_rest() {
        let mut vehicle = Vehicle {
            speed: 20.0,
            ..Default::default()
        };
        for _ in 0..100 {
            vehicle.apply_throttle(0.0, 0.1);
        }
        assert_eq!(vehicle.speed, 0.0);
    }
}
