//! CorePlugin wires the scaled simulation clock and the one-second game tick.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

const DEFAULT_TIME_SCALE: f32 = 1.0;
const MIN_TIME_SCALE: f32 = 0.001;
const SECOND: Duration = Duration::from_secs(1);

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct DebugTickTimer {
    timer: Timer,
}

#[cfg(feature = "core_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Tracks scaled simulation time and counts whole game seconds as they complete.
#[derive(Resource, Debug)]
pub struct SimulationClock {
    time_scale: f32,
    last_real_delta: Duration,
    last_scaled_delta: Duration,
    second_accumulator: Duration,
    seconds_this_frame: u32,
}

impl SimulationClock {
    /// Creates a new clock with the provided time-scale multiplier.
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale: time_scale.max(MIN_TIME_SCALE),
            last_real_delta: Duration::ZERO,
            last_scaled_delta: Duration::ZERO,
            second_accumulator: Duration::ZERO,
            seconds_this_frame: 0,
        }
    }

    /// Sets the time-scale multiplier (clamped to a small positive minimum).
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(MIN_TIME_SCALE);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Last real (unscaled) delta reported by Bevy's Time resource.
    #[cfg_attr(not(any(test, feature = "core_debug")), allow(dead_code))]
    pub fn last_real_delta(&self) -> Duration {
        self.last_real_delta
    }

    /// Last scaled delta after applying the multiplier.
    pub fn last_scaled_delta(&self) -> Duration {
        self.last_scaled_delta
    }

    /// Number of one-second ticks that completed during the last frame.
    pub fn seconds_this_frame(&self) -> u32 {
        self.seconds_this_frame
    }

    /// Applies a real delta, accumulating scaled time into whole seconds.
    pub fn tick(&mut self, real_delta: Duration) {
        self.last_real_delta = real_delta;
        self.last_scaled_delta = real_delta.mul_f32(self.time_scale);
        self.second_accumulator += self.last_scaled_delta;

        let mut completed = 0;
        while self.second_accumulator >= SECOND {
            self.second_accumulator -= SECOND;
            completed += 1;
        }
        self.seconds_this_frame = completed;
    }

    /// Drops any partial second so the next tick lands a full second from now.
    pub fn realign_seconds(&mut self) {
        self.second_accumulator = Duration::ZERO;
        self.seconds_this_frame = 0;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_SCALE)
    }
}

/// Registers simulation timing systems and resources.
#[derive(Debug, Clone, Copy)]
pub struct CorePlugin {
    time_scale: f32,
}

impl CorePlugin {
    /// Creates a CorePlugin with the provided time-scale multiplier.
    pub const fn with_time_scale(time_scale: f32) -> Self {
        Self { time_scale }
    }
}

impl Default for CorePlugin {
    fn default() -> Self {
        Self::with_time_scale(DEFAULT_TIME_SCALE)
    }
}

/// Schedule label for systems that advance the simulation clock.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClockSet;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SimulationClock::new(self.time_scale))
            .add_systems(Startup, log_startup_time_scale)
            .add_systems(Update, update_simulation_clock.in_set(ClockSet));

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugTickTimer::default())
                .add_systems(Update, log_scaled_ticks.after(ClockSet));
        }
    }
}

fn update_simulation_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

fn log_startup_time_scale(clock: Res<SimulationClock>) {
    info!(
        "CorePlugin initialised with time scale: {:.3}",
        clock.time_scale()
    );
}

#[cfg(feature = "core_debug")]
fn log_scaled_ticks(mut timer: ResMut<DebugTickTimer>, clock: Res<SimulationClock>) {
    if timer.timer.tick(clock.last_scaled_delta()).just_finished() {
        info!(
            target: "core_debug",
            "scale: {:.3} | real dt: {:.4}s | scaled dt: {:.4}s | seconds this frame: {}",
            clock.time_scale(),
            clock.last_real_delta().as_secs_f32(),
            clock.last_scaled_delta().as_secs_f32(),
            clock.seconds_this_frame(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_scales_delta_with_multiplier() {
        let mut clock = SimulationClock::new(2.5);
        clock.tick(Duration::from_millis(200));

        assert_eq!(clock.time_scale(), 2.5);
        assert_eq!(clock.last_real_delta(), Duration::from_millis(200));
        assert_eq!(clock.last_scaled_delta(), Duration::from_millis(500));
        assert_eq!(clock.seconds_this_frame(), 0);
    }

    #[test]
    fn clock_counts_whole_seconds_across_frames() {
        let mut clock = SimulationClock::new(1.0);
        clock.tick(Duration::from_millis(600));
        assert_eq!(clock.seconds_this_frame(), 0);

        clock.tick(Duration::from_millis(600));
        assert_eq!(clock.seconds_this_frame(), 1);

        clock.tick(Duration::from_millis(2_500));
        assert_eq!(clock.seconds_this_frame(), 2);

        clock.tick(Duration::from_millis(400));
        assert_eq!(clock.seconds_this_frame(), 1);
    }

    #[test]
    fn realign_discards_partial_second() {
        let mut clock = SimulationClock::new(1.0);
        clock.tick(Duration::from_millis(900));
        clock.realign_seconds();
        clock.tick(Duration::from_millis(900));
        assert_eq!(clock.seconds_this_frame(), 0);
    }

    #[test]
    fn clock_clamps_min_time_scale() {
        let mut clock = SimulationClock::new(0.0);
        assert!((clock.time_scale() - MIN_TIME_SCALE).abs() < f32::EPSILON);

        clock.set_time_scale(-5.0);
        assert!((clock.time_scale() - MIN_TIME_SCALE).abs() < f32::EPSILON);
    }
}
