#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! Hosts translate their native touch/mouse input into [`PointerEvent`]
//! values in container-local coordinates.
//!
//! # Design Notes
//!
//! - Every event carries a pointer id so multi-pointer streams can be
//!   attributed without a separate "active pointer" channel.
//! - `velocity` is an optional host estimate. It is only meaningful on
//!   [`PointerEventKind::Up`]; when absent the drag controller derives one
//!   from timestamped moves.
//! - `Cancel` is a release that never flings.

use web_time::Instant;

use crate::geometry::Point;

/// The lifecycle phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer pressed.
    Down,
    /// Pointer moved while pressed.
    Move,
    /// Pointer released.
    Up,
    /// Gesture interrupted by the host.
    Cancel,
}

/// Release velocity in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    /// No motion.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new velocity.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Check whether both components are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Clamp each component's magnitude into `[min, max]`.
    ///
    /// Components below `min` snap to zero, components above `max` are
    /// limited to `±max`. Non-finite components become zero.
    #[must_use]
    pub fn clamp_magnitude(self, min: f32, max: f32) -> Self {
        fn clamp(value: f32, min: f32, max: f32) -> f32 {
            if !value.is_finite() {
                return 0.0;
            }
            let magnitude = value.abs();
            if magnitude < min {
                0.0
            } else if magnitude > max {
                max.copysign(value)
            } else {
                value
            }
        }
        Self {
            x: clamp(self.x, min, max),
            y: clamp(self.y, min, max),
        }
    }
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The lifecycle phase.
    pub kind: PointerEventKind,
    /// Host pointer id.
    pub pointer_id: u32,
    /// X coordinate in container-local pixels.
    pub x: i32,
    /// Y coordinate in container-local pixels.
    pub y: i32,
    /// Host velocity estimate (release events).
    pub velocity: Option<Velocity>,
    /// Host timestamp, used for velocity tracking.
    pub timestamp: Option<Instant>,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, pointer_id: u32, x: i32, y: i32) -> Self {
        Self {
            kind,
            pointer_id,
            x,
            y,
            velocity: None,
            timestamp: None,
        }
    }

    /// Pointer-down event.
    #[must_use]
    pub const fn down(pointer_id: u32, x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Down, pointer_id, x, y)
    }

    /// Pointer-move event.
    #[must_use]
    pub const fn moved(pointer_id: u32, x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Move, pointer_id, x, y)
    }

    /// Pointer-up event.
    #[must_use]
    pub const fn up(pointer_id: u32, x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Up, pointer_id, x, y)
    }

    /// Pointer-cancel event.
    #[must_use]
    pub const fn cancel(pointer_id: u32, x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Cancel, pointer_id, x, y)
    }

    /// Attach a host velocity estimate.
    #[must_use]
    pub const fn with_velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// Attach a host timestamp.
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: Instant) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Get the position as a point.
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether this event ends the pointer's lifecycle.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.kind, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}
