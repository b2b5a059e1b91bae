#![forbid(unsafe_code)]

//! Release velocity estimation.
//!
//! [`VelocityTracker`] keeps a short history of timestamped pointer samples
//! and estimates the velocity at release from the samples inside a trailing
//! window. Hosts that already compute velocity attach it to the up event and
//! never need the tracker.
//!
//! # Invariants
//!
//! 1. At most [`MAX_SAMPLES`] samples are retained; the oldest drop first.
//! 2. Samples older than the horizon (relative to the newest) never
//!    contribute to the estimate.
//! 3. Fewer than two usable samples, or a zero time span, estimate
//!    [`Velocity::ZERO`].

use std::collections::VecDeque;
use std::time::Duration;

use web_time::Instant;

use crate::event::Velocity;
use crate::geometry::Point;

/// Maximum number of retained samples.
pub const MAX_SAMPLES: usize = 20;

/// Default trailing window used for the estimate.
pub const DEFAULT_HORIZON: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy)]
struct Sample {
    position: Point,
    time: Instant,
}

/// Trailing-window pointer velocity estimator.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: VecDeque<Sample>,
    horizon: Duration,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON)
    }
}

impl VelocityTracker {
    /// Create a tracker with the given trailing window.
    #[must_use]
    pub fn new(horizon: Duration) -> Self {
        Self {
            samples: VecDeque::with_capacity(MAX_SAMPLES),
            horizon,
        }
    }

    /// Record a pointer sample.
    ///
    /// Samples older than the newest recorded one are dropped.
    pub fn add_sample(&mut self, position: Point, time: Instant) {
        if self.samples.back().is_some_and(|last| time < last.time) {
            return;
        }
        if self.samples.len() == MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { position, time });
    }

    /// Number of retained samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Forget all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Estimate velocity in pixels per second.
    #[must_use]
    pub fn estimate(&self) -> Velocity {
        let Some(newest) = self.samples.back() else {
            return Velocity::ZERO;
        };
        let Some(oldest) = self
            .samples
            .iter()
            .find(|sample| newest.time.duration_since(sample.time) <= self.horizon)
        else {
            return Velocity::ZERO;
        };
        let span = newest.time.duration_since(oldest.time).as_secs_f32();
        if span <= 0.0 {
            return Velocity::ZERO;
        }
        let (dx, dy) = newest.position.delta_from(oldest.position);
        Velocity::new(dx as f32 / span, dy as f32 / span)
    }
}
