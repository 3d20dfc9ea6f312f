//! Delivery mission state machine: orders, pickup/delivery, scoring and the countdown.
use bevy::log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::{
    config::MissionSettings,
    errors::MissionConfigError,
    host::{MissionHost, SiteDirectory},
    schedule::{ScheduledAction, TaskHandle},
    selection::choose_site,
    types::{
        distance_between, format_clock, GameStatus, Order, ScoreState, Severity, Site, SiteId,
        SiteKind, StatsSnapshot, TimerState,
    },
};

/// Result of a proximity check against an order target.
enum Proximity {
    InRange,
    Near(f32),
    Far,
}

/// Owns the single mission state block. All transitions go through its methods;
/// guard violations return `false` and leave state untouched.
#[derive(Debug, Clone)]
pub struct MissionController {
    settings: MissionSettings,
    restaurants: Vec<Site>,
    houses: Vec<Site>,
    rng: ChaCha20Rng,
    status: GameStatus,
    score: ScoreState,
    timer: TimerState,
    order: Option<Order>,
    last_restaurant: Option<SiteId>,
    last_house: Option<SiteId>,
    carrying: bool,
    epoch: u64,
    pending: Vec<(TaskHandle, ScheduledAction)>,
}

impl MissionController {
    /// Builds an idle controller. Fails if the settings are inconsistent or the
    /// directory has no restaurants or no houses.
    pub fn new(
        settings: MissionSettings,
        directory: &dyn SiteDirectory,
    ) -> Result<Self, MissionConfigError> {
        settings.validate()?;

        let restaurants = directory.sites(SiteKind::Restaurant);
        if restaurants.is_empty() {
            return Err(MissionConfigError::NoRestaurants);
        }
        let houses = directory.sites(SiteKind::House);
        if houses.is_empty() {
            return Err(MissionConfigError::NoHouses);
        }

        let seed = settings.seed.unwrap_or_else(rand::random);
        info!(
            target: "mission",
            "Mission ready: {} restaurant(s), {} house(s), goal {} deliveries in {}s (seed {})",
            restaurants.len(),
            houses.len(),
            settings.delivery_goal,
            settings.time_limit_seconds,
            seed
        );

        Ok(Self {
            timer: TimerState::new(settings.time_limit_seconds),
            settings,
            restaurants,
            houses,
            rng: ChaCha20Rng::seed_from_u64(seed),
            status: GameStatus::Idle,
            score: ScoreState::default(),
            order: None,
            last_restaurant: None,
            last_house: None,
            carrying: false,
            epoch: 0,
            pending: Vec::new(),
        })
    }

    pub fn settings(&self) -> &MissionSettings {
        &self.settings
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn score(&self) -> ScoreState {
        self.score
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn timer(&self) -> TimerState {
        self.timer
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn is_carrying(&self) -> bool {
        self.carrying
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            score: self.score.score,
            deliveries: self.score.deliveries,
            delivery_goal: self.settings.delivery_goal,
            level: self.score.level,
            elapsed_seconds: self.timer.elapsed_seconds,
            remaining_seconds: self.timer.remaining_seconds,
            time_limit: self.settings.time_limit_seconds,
            carrying: self.carrying,
            status: self.status,
            restaurant_name: self.order.as_ref().map(|o| o.restaurant.name.clone()),
            house_name: self.order.as_ref().map(|o| o.house.name.clone()),
        }
    }

    /// Begins a fresh mission from any state.
    pub fn start<H: MissionHost + ?Sized>(&mut self, host: &mut H) -> bool {
        info!(target: "mission", "Starting mission (previous status: {})", self.status);
        self.restart(host);
        true
    }

    /// Clears score, timer and order, then starts again. Safe to call repeatedly.
    pub fn reset<H: MissionHost + ?Sized>(&mut self, host: &mut H) -> bool {
        info!(target: "mission", "Resetting mission (previous status: {})", self.status);
        self.restart(host);
        true
    }

    fn restart<H: MissionHost + ?Sized>(&mut self, host: &mut H) {
        self.cancel_pending(host);
        self.epoch += 1;
        self.score = ScoreState::default();
        self.timer = TimerState::new(self.settings.time_limit_seconds);
        self.order = None;
        self.carrying = false;
        self.status = GameStatus::Running;
        self.new_order(host);
    }

    /// Assigns a new restaurant/house pair. Rejected outside a live mission.
    pub fn new_order<H: MissionHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.status.is_live() {
            debug!(target: "mission", "New order ignored while {}", self.status);
            return false;
        }

        let Some(restaurant) =
            choose_site(&self.restaurants, self.last_restaurant, &mut self.rng).cloned()
        else {
            return false;
        };
        let Some(house) = choose_site(&self.houses, self.last_house, &mut self.rng).cloned() else {
            return false;
        };

        self.epoch += 1;
        self.last_restaurant = Some(restaurant.id);
        self.last_house = Some(house.id);
        self.carrying = false;

        info!(
            target: "mission",
            "New order {} -> {} (epoch {})",
            restaurant.name,
            house.name,
            self.epoch
        );
        host.notify(
            &format!(
                "New order: head to \"{}\" and press Space to pick it up",
                restaurant.name
            ),
            Severity::Info,
        );
        self.order = Some(Order { restaurant, house });

        let delay = self.settings.destination_hint_delay;
        self.schedule(host, delay, ScheduledAction::DestinationHint { epoch: self.epoch });
        self.publish(host);
        true
    }

    /// Picks up the package when the player is inside the pickup radius.
    pub fn pickup<H: MissionHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.status != GameStatus::Running {
            debug!(target: "mission", "Pickup rejected while {}", self.status);
            return false;
        }
        if self.carrying {
            debug!(target: "mission", "Pickup rejected: already carrying a package");
            return false;
        }
        let Some(order) = self.order.as_ref() else {
            debug!(target: "mission", "Pickup rejected: no active order");
            return false;
        };

        let distance = distance_between(host.player_position(), order.restaurant.position);
        match self.classify(distance, self.settings.pickup_radius) {
            Proximity::InRange => {
                let house = order.house.name.clone();
                self.carrying = true;
                info!(target: "mission", "Package picked up ({:.2} units away)", distance);
                host.notify(
                    &format!("Order picked up! Take it to {house}"),
                    Severity::Success,
                );
                self.publish(host);
                true
            }
            Proximity::Near(distance) => {
                host.notify(
                    &format!("Get closer to the restaurant ({distance:.0}m)"),
                    Severity::Warning,
                );
                false
            }
            Proximity::Far => false,
        }
    }

    /// Hands over the package when the player is inside the delivery radius.
    pub fn deliver<H: MissionHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.status != GameStatus::Running {
            debug!(target: "mission", "Delivery rejected while {}", self.status);
            return false;
        }
        if !self.carrying {
            debug!(target: "mission", "Delivery rejected: no package on board");
            return false;
        }
        let Some(order) = self.order.as_ref() else {
            debug!(target: "mission", "Delivery rejected: no active order");
            return false;
        };

        let distance = distance_between(host.player_position(), order.house.position);
        match self.classify(distance, self.settings.delivery_radius) {
            Proximity::InRange => {
                self.complete_delivery(host);
                true
            }
            Proximity::Near(distance) => {
                host.notify(
                    &format!("Get closer to the house ({distance:.0}m)"),
                    Severity::Warning,
                );
                false
            }
            Proximity::Far => false,
        }
    }

    fn complete_delivery<H: MissionHost + ?Sized>(&mut self, host: &mut H) {
        self.carrying = false;
        self.order = None;

        let level = self.score.level;
        let points = self.settings.base_points * level;
        let bonus = self.settings.time_bonus(self.timer.elapsed_seconds) * level;
        self.score.deliveries += 1;
        self.score.score += points + bonus;

        if self.score.deliveries % self.settings.level_every == 0 {
            self.score.level += 1;
            host.notify(
                &format!("Level {} reached! More points per delivery", self.score.level),
                Severity::Success,
            );
        }

        let bonus_text = if bonus > 0 {
            format!(" (+{bonus} bonus)")
        } else {
            String::new()
        };
        host.notify(
            &format!(
                "Delivery {}/{}! +{}{}",
                self.score.deliveries, self.settings.delivery_goal, points, bonus_text
            ),
            Severity::Success,
        );
        info!(
            target: "mission",
            "Delivery {} complete: +{} points, +{} bonus, score {}",
            self.score.deliveries,
            points,
            bonus,
            self.score.score
        );

        if self.score.deliveries >= self.settings.delivery_goal {
            self.finish(true, host);
            return;
        }

        let delay = self.settings.new_order_delay;
        self.schedule(host, delay, ScheduledAction::NewOrder { epoch: self.epoch });
        self.publish(host);
    }

    /// Picks up or delivers depending on whether a package is on board.
    pub fn interact<H: MissionHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.carrying {
            self.deliver(host)
        } else {
            self.pickup(host)
        }
    }

    /// Advances the countdown by one second. No-op unless Running.
    pub fn tick<H: MissionHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        self.timer.elapsed_seconds += 1;
        self.timer.remaining_seconds = self
            .settings
            .time_limit_seconds
            .saturating_sub(self.timer.elapsed_seconds);

        let remaining = self.timer.remaining_seconds;
        if remaining == 0 {
            self.finish(false, host);
            return true;
        }

        if self.settings.warning_thresholds.contains(&remaining) {
            let message = if remaining % 60 == 0 {
                let minutes = remaining / 60;
                let unit = if minutes == 1 { "MINUTE" } else { "MINUTES" };
                format!("{minutes} {unit} left!")
            } else {
                format!("{remaining} SECONDS left!")
            };
            host.notify(&message, Severity::Warning);
        }
        self.publish(host);
        true
    }

    /// Toggles Running and Paused. Returns `false` when no mission is live.
    pub fn toggle_pause<H: MissionHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => {
                debug!(target: "mission", "Pause toggle ignored while {}", other);
                return false;
            }
        };
        info!(target: "mission", "Mission {}", self.status);
        self.publish(host);
        true
    }

    /// Runs a deferred action, discarding it if it was scheduled under an older epoch.
    pub fn fire<H: MissionHost + ?Sized>(&mut self, action: ScheduledAction, host: &mut H) -> bool {
        if let Some(index) = self.pending.iter().position(|(_, a)| *a == action) {
            self.pending.swap_remove(index);
        }

        if action.epoch() != self.epoch || !self.status.is_live() {
            debug!(
                target: "mission",
                "Discarding stale {:?} (current epoch {}, status {})",
                action,
                self.epoch,
                self.status
            );
            return false;
        }

        match action {
            ScheduledAction::NewOrder { .. } => {
                if self.order.is_some() {
                    return false;
                }
                self.new_order(host)
            }
            ScheduledAction::DestinationHint { .. } => match self.order.as_ref() {
                Some(order) => {
                    let house = order.house.name.clone();
                    host.notify(&format!("Destination: \"{house}\""), Severity::Info);
                    true
                }
                None => false,
            },
        }
    }

    fn finish<H: MissionHost + ?Sized>(&mut self, won: bool, host: &mut H) {
        self.cancel_pending(host);
        self.carrying = false;
        if won {
            self.status = GameStatus::WonTerminal;
            host.notify(
                &format!(
                    "YOU WIN! {} deliveries in {}. Score: {}",
                    self.score.deliveries,
                    format_clock(self.timer.elapsed_seconds),
                    self.score.score
                ),
                Severity::Success,
            );
        } else {
            self.status = GameStatus::LostTerminal;
            host.notify(
                &format!(
                    "TIME'S UP! Only {}/{} deliveries. Press R to restart.",
                    self.score.deliveries, self.settings.delivery_goal
                ),
                Severity::Warning,
            );
        }
        info!(
            target: "mission",
            "Mission {} with score {} after {}s",
            self.status,
            self.score.score,
            self.timer.elapsed_seconds
        );
        self.publish(host);
    }

    fn classify(&self, distance: f32, success_radius: f32) -> Proximity {
        if distance < success_radius {
            Proximity::InRange
        } else if distance < self.settings.hint_radius {
            Proximity::Near(distance)
        } else {
            Proximity::Far
        }
    }

    fn schedule<H: MissionHost + ?Sized>(
        &mut self,
        host: &mut H,
        delay: std::time::Duration,
        action: ScheduledAction,
    ) {
        let handle = host.schedule_once(delay, action);
        self.pending.push((handle, action));
    }

    fn cancel_pending<H: MissionHost + ?Sized>(&mut self, host: &mut H) {
        for (handle, _) in self.pending.drain(..) {
            host.cancel(handle);
        }
    }

    fn publish<H: MissionHost + ?Sized>(&self, host: &mut H) {
        host.stats_changed(&self.snapshot());
    }
}
