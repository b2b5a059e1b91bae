#![forbid(unsafe_code)]

//! Two-axis settle motion for a released child.
//!
//! A [`SettleMotion`] pairs one motion per axis (spring slide, friction
//! fling, or stationary) and reports whole-pixel positions. Each axis
//! completes independently; the motion is complete when both are.

use std::time::Duration;

use super::{Animation, Decay, Spring};
use crate::event::Velocity;
use crate::geometry::Point;

/// One axis of a settle motion.
#[derive(Debug, Clone)]
enum AxisMotion {
    Still(i32),
    Slide(Spring),
    Fling(Decay),
}

impl AxisMotion {
    fn slide(from: i32, to: i32) -> Self {
        if from == to {
            Self::Still(to)
        } else {
            Self::Slide(Spring::new(f64::from(from), f64::from(to)))
        }
    }

    fn fling(from: i32, velocity: f32, friction: f64, range: (i32, i32)) -> Self {
        let decay = Decay::new(f64::from(from), f64::from(velocity), friction)
            .with_bounds(f64::from(range.0), f64::from(range.1));
        if decay.is_complete() && round_px(decay.position()) == from {
            Self::Still(from)
        } else {
            Self::Fling(decay)
        }
    }

    fn position(&self) -> i32 {
        match self {
            Self::Still(at) => *at,
            Self::Slide(spring) => round_px(spring.position()),
            Self::Fling(decay) => round_px(decay.position()),
        }
    }

    fn final_position(&self) -> i32 {
        match self {
            Self::Still(at) => *at,
            Self::Slide(spring) => round_px(spring.target()),
            Self::Fling(decay) => round_px(decay.final_position()),
        }
    }

    fn tick(&mut self, dt: Duration) {
        match self {
            Self::Still(_) => {}
            Self::Slide(spring) => spring.tick(dt),
            Self::Fling(decay) => decay.tick(dt),
        }
    }

    fn is_complete(&self) -> bool {
        match self {
            Self::Still(_) => true,
            Self::Slide(spring) => spring.is_complete(),
            Self::Fling(decay) => decay.is_complete(),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Still(_) => {}
            Self::Slide(spring) => spring.reset(),
            Self::Fling(decay) => decay.reset(),
        }
    }
}

fn round_px(value: f64) -> i32 {
    // `as` saturates on overflow and maps NaN to 0.
    value.round() as i32
}

/// Settle motion of a child's top-left corner.
#[derive(Debug, Clone)]
pub struct SettleMotion {
    x: AxisMotion,
    y: AxisMotion,
}

impl SettleMotion {
    /// Slide from `from` to `to` with critically damped springs.
    #[must_use]
    pub fn slide(from: Point, to: Point) -> Self {
        Self {
            x: AxisMotion::slide(from.x, to.x),
            y: AxisMotion::slide(from.y, to.y),
        }
    }

    /// Fling from `from` with `velocity`, decelerating with `friction`, and
    /// confined to the `min..=max` corner range.
    #[must_use]
    pub fn fling(from: Point, velocity: Velocity, friction: f64, min: Point, max: Point) -> Self {
        Self {
            x: AxisMotion::fling(from.x, velocity.x, friction, (min.x, max.x)),
            y: AxisMotion::fling(from.y, velocity.y, friction, (min.y, max.y)),
        }
    }

    /// Current whole-pixel position.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x.position(), self.y.position())
    }

    /// Where the motion comes to rest.
    #[must_use]
    pub fn final_position(&self) -> Point {
        Point::new(self.x.final_position(), self.y.final_position())
    }
}

impl Animation for SettleMotion {
    fn tick(&mut self, dt: Duration) {
        self.x.tick(dt);
        self.y.tick(dt);
    }

    fn is_complete(&self) -> bool {
        self.x.is_complete() && self.y.is_complete()
    }

    fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}
