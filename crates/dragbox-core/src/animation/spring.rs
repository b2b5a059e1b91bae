#![forbid(unsafe_code)]

//! Damped harmonic oscillator (spring) along one axis, in pixels.
//!
//! Used to slide a released child to a target position:
//!
//!   F = -stiffness × (position - target) - damping × velocity
//!
//! # Invariants
//!
//! 1. A spring at rest (`is_complete() == true`) sits exactly on its target
//!    and does not resume unless `reset()` is called.
//! 2. Damping is critical for the stiffness: `2 × √stiffness`.
//! 3. Large `dt` values are subdivided into steps of at most 4ms.

use std::time::Duration;

use super::Animation;

/// Maximum dt per integration step (4ms).
const MAX_STEP_SECS: f64 = 0.004;

/// Position delta (pixels) below which the spring is "at rest".
const DEFAULT_REST_THRESHOLD: f64 = 0.5;

/// Velocity (pixels/sec) below which the spring is "at rest".
const DEFAULT_VELOCITY_THRESHOLD: f64 = 5.0;

/// Default stiffness for settle slides.
pub const DEFAULT_STIFFNESS: f64 = 170.0;

/// A damped spring moving one coordinate toward its target.
#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    initial: f64,
    stiffness: f64,
    damping: f64,
    rest_threshold: f64,
    velocity_threshold: f64,
    at_rest: bool,
}

impl Spring {
    /// Create a critically damped spring from `initial` to `target`.
    #[must_use]
    pub fn new(initial: f64, target: f64) -> Self {
        let mut spring = Self {
            position: initial,
            velocity: 0.0,
            target,
            initial,
            stiffness: DEFAULT_STIFFNESS,
            damping: 2.0 * DEFAULT_STIFFNESS.sqrt(),
            rest_threshold: DEFAULT_REST_THRESHOLD,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            at_rest: false,
        };
        spring.settle_if_at_rest();
        spring
    }

    /// Current position.
    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current velocity.
    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Current target.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    fn step(&mut self, dt: f64) {
        // Semi-implicit Euler.
        let displacement = self.position - self.target;
        let acceleration = -self.stiffness * displacement - self.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    fn settle_if_at_rest(&mut self) {
        let pos_delta = (self.position - self.target).abs();
        if pos_delta < self.rest_threshold && self.velocity.abs() < self.velocity_threshold {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }

    /// Advance the spring by `dt`, subdividing for stability.
    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let step_dt = remaining.min(MAX_STEP_SECS);
            self.step(step_dt);
            remaining -= step_dt;
        }
        self.settle_if_at_rest();
    }
}

impl Animation for Spring {
    fn tick(&mut self, dt: Duration) {
        self.advance(dt);
    }

    fn is_complete(&self) -> bool {
        self.at_rest
    }

    fn reset(&mut self) {
        self.position = self.initial;
        self.velocity = 0.0;
        self.at_rest = false;
        self.settle_if_at_rest();
    }
}
