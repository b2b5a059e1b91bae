#![forbid(unsafe_code)]

//! Friction decay (fling) along one axis, in pixels.
//!
//! Closed-form exponential deceleration:
//!
//!   v(t) = v0 · e^(-k·t)
//!   x(t) = x0 + v0 / k · (1 - e^(-k·t))
//!
//! The motion is confined to `[min, max]`: reaching either bound stops it
//! on the bound. It also completes once the velocity drops below the stop
//! threshold, snapping to the asymptotic rest position.

use std::time::Duration;

use super::Animation;

/// Minimum friction coefficient (per second).
const MIN_FRICTION: f64 = 0.01;

/// Default velocity (pixels/sec) below which a fling stops.
pub const DEFAULT_STOP_VELOCITY: f64 = 20.0;

/// An exponentially decelerating fling.
#[derive(Debug, Clone)]
pub struct Decay {
    origin: f64,
    initial_velocity: f64,
    friction: f64,
    stop_velocity: f64,
    min: f64,
    max: f64,
    elapsed: f64,
    position: f64,
    complete: bool,
}

impl Decay {
    /// Create a fling from `origin` with `velocity` (pixels/sec) and
    /// `friction` (per second), unbounded.
    #[must_use]
    pub fn new(origin: f64, velocity: f64, friction: f64) -> Self {
        let mut decay = Self {
            origin,
            initial_velocity: velocity,
            friction: friction.max(MIN_FRICTION),
            stop_velocity: DEFAULT_STOP_VELOCITY,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            elapsed: 0.0,
            position: origin,
            complete: false,
        };
        decay.update_completion();
        decay
    }

    /// Confine the motion to `[min, max]` (builder pattern).
    #[must_use]
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max.max(min);
        self.position = self.position.clamp(self.min, self.max);
        self.update_completion();
        self
    }

    /// Current position.
    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current velocity.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        if self.complete {
            0.0
        } else {
            self.initial_velocity * (-self.friction * self.elapsed).exp()
        }
    }

    /// Where the fling comes to rest, bounds applied.
    #[must_use]
    pub fn final_position(&self) -> f64 {
        (self.origin + self.initial_velocity / self.friction).clamp(self.min, self.max)
    }

    fn update_completion(&mut self) {
        if self.complete {
            return;
        }
        let at_bound = (self.position <= self.min && self.initial_velocity <= 0.0)
            || (self.position >= self.max && self.initial_velocity >= 0.0);
        if at_bound {
            self.complete = true;
        } else if self.velocity().abs() < self.stop_velocity {
            self.position = self.final_position();
            self.complete = true;
        }
    }
}

impl Animation for Decay {
    fn tick(&mut self, dt: Duration) {
        if self.complete {
            return;
        }
        self.elapsed += dt.as_secs_f64();
        let decay = 1.0 - (-self.friction * self.elapsed).exp();
        let raw = self.origin + self.initial_velocity / self.friction * decay;
        self.position = raw.clamp(self.min, self.max);
        self.update_completion();
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn reset(&mut self) {
        self.elapsed = 0.0;
        self.position = self.origin.clamp(self.min, self.max);
        self.complete = false;
        self.update_completion();
    }
}
