//! Drag controller configuration.

use std::fmt;
use std::time::Duration;

/// Pointer travel (pixels) before a move over a child becomes a drag.
pub const DEFAULT_TOUCH_SLOP: u16 = 8;

/// Time advanced by one settle tick.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Release speeds below this (pixels/sec, per axis) count as zero.
pub const DEFAULT_MIN_FLING_VELOCITY: f32 = 50.0;

/// Release speeds are limited to this (pixels/sec, per axis).
pub const DEFAULT_MAX_FLING_VELOCITY: f32 = 8000.0;

/// Fling deceleration coefficient (per second).
pub const DEFAULT_FLING_FRICTION: f64 = 4.0;

/// Errors raised while validating a [`DragConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragConfigError {
    /// Settle ticks must advance time.
    ZeroFrameInterval,
    /// Fling velocity limits must be finite, non-negative, and ordered.
    InvalidFlingVelocity { min: f32, max: f32 },
    /// Fling friction must be finite and positive.
    InvalidFlingFriction { friction: f64 },
}

impl fmt::Display for DragConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFrameInterval => write!(f, "frame interval must be non-zero"),
            Self::InvalidFlingVelocity { min, max } => write!(
                f,
                "fling velocity limits must satisfy 0 <= min <= max (got min={min}, max={max})"
            ),
            Self::InvalidFlingFriction { friction } => {
                write!(f, "fling friction must be finite and > 0 (got {friction})")
            }
        }
    }
}

impl std::error::Error for DragConfigError {}

/// Drag controller configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    /// Intercept threshold in pixels along draggable axes.
    pub touch_slop: u16,
    /// Time advanced by each settle tick.
    pub frame_interval: Duration,
    /// Release speeds below this snap to zero.
    pub min_fling_velocity: f32,
    /// Release speeds are limited to this.
    pub max_fling_velocity: f32,
    /// Fling deceleration coefficient.
    pub fling_friction: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            touch_slop: DEFAULT_TOUCH_SLOP,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            min_fling_velocity: DEFAULT_MIN_FLING_VELOCITY,
            max_fling_velocity: DEFAULT_MAX_FLING_VELOCITY,
            fling_friction: DEFAULT_FLING_FRICTION,
        }
    }
}

impl DragConfig {
    /// Set the touch slop.
    #[must_use]
    pub const fn with_touch_slop(mut self, touch_slop: u16) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    /// Set the settle tick interval.
    #[must_use]
    pub const fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    /// Set the release velocity limits.
    #[must_use]
    pub const fn with_fling_velocity(mut self, min: f32, max: f32) -> Self {
        self.min_fling_velocity = min;
        self.max_fling_velocity = max;
        self
    }

    /// Set the fling friction.
    #[must_use]
    pub const fn with_fling_friction(mut self, friction: f64) -> Self {
        self.fling_friction = friction;
        self
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), DragConfigError> {
        if self.frame_interval.is_zero() {
            return Err(DragConfigError::ZeroFrameInterval);
        }
        let (min, max) = (self.min_fling_velocity, self.max_fling_velocity);
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && min <= max) {
            return Err(DragConfigError::InvalidFlingVelocity { min, max });
        }
        if !(self.fling_friction.is_finite() && self.fling_friction > 0.0) {
            return Err(DragConfigError::InvalidFlingFriction {
                friction: self.fling_friction,
            });
        }
        Ok(())
    }
}
