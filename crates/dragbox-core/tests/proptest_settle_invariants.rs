//! Property-based invariant tests for settle motion and release velocity.
//!
//! 1. A bounded fling never leaves its range, frame by frame.
//! 2. A fling only moves in the direction of its initial velocity.
//! 3. A completed fling rests exactly on its reported final position.
//! 4. A slide ends exactly on its target.
//! 5. Clamped velocity components are zero or within `[min, max]`, sign kept.

use dragbox_core::animation::{Animation, Decay, SettleMotion};
use dragbox_core::event::Velocity;
use dragbox_core::geometry::Point;
use proptest::prelude::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);
const MAX_FRAMES: usize = 2000;

fn range_strategy() -> impl Strategy<Value = (f64, f64, f64)> {
    (-2000i32..2000, 0i32..2000, 0.0f64..1.0).prop_map(|(min, span, at)| {
        let max = min + span;
        let origin = f64::from(min) + at * f64::from(span);
        (f64::from(min), f64::from(max), origin)
    })
}

proptest! {
    #[test]
    fn bounded_fling_stays_in_range(
        (min, max, origin) in range_strategy(),
        velocity in -8000.0f64..8000.0,
        friction in 0.5f64..20.0,
    ) {
        let mut decay = Decay::new(origin, velocity, friction).with_bounds(min, max);
        let mut frames = 0;
        while !decay.is_complete() && frames < MAX_FRAMES {
            decay.tick(FRAME);
            prop_assert!(decay.position() >= min && decay.position() <= max);
            frames += 1;
        }
        prop_assert!(decay.is_complete());
        prop_assert!(decay.final_position() >= min && decay.final_position() <= max);
    }

    #[test]
    fn fling_moves_with_its_velocity(
        (min, max, origin) in range_strategy(),
        velocity in -8000.0f64..8000.0,
        friction in 0.5f64..20.0,
    ) {
        let mut decay = Decay::new(origin, velocity, friction).with_bounds(min, max);
        let mut previous = decay.position();
        let mut frames = 0;
        while !decay.is_complete() && frames < MAX_FRAMES {
            decay.tick(FRAME);
            let position = decay.position();
            if velocity >= 0.0 {
                prop_assert!(position >= previous);
            } else {
                prop_assert!(position <= previous);
            }
            previous = position;
            frames += 1;
        }
    }

    #[test]
    fn completed_fling_rests_on_final_position(
        x in -1000i32..1000,
        y in -1000i32..1000,
        vx in -6000.0f32..6000.0,
        vy in -6000.0f32..6000.0,
        friction in 0.5f64..20.0,
    ) {
        let min = Point::new(-1000, -1000);
        let max = Point::new(1000, 1000);
        let mut motion =
            SettleMotion::fling(Point::new(x, y), Velocity::new(vx, vy), friction, min, max);
        let expected = motion.final_position();
        let mut frames = 0;
        while !motion.is_complete() && frames < MAX_FRAMES {
            motion.tick(FRAME);
            frames += 1;
        }
        prop_assert!(motion.is_complete());
        prop_assert_eq!(motion.position(), expected);
        prop_assert!(expected.x >= min.x && expected.x <= max.x);
        prop_assert!(expected.y >= min.y && expected.y <= max.y);
    }

    #[test]
    fn slide_lands_on_target(
        from_x in -2000i32..2000,
        from_y in -2000i32..2000,
        to_x in -2000i32..2000,
        to_y in -2000i32..2000,
    ) {
        let target = Point::new(to_x, to_y);
        let mut motion = SettleMotion::slide(Point::new(from_x, from_y), target);
        prop_assert_eq!(motion.final_position(), target);
        let mut frames = 0;
        while !motion.is_complete() && frames < MAX_FRAMES {
            motion.tick(FRAME);
            frames += 1;
        }
        prop_assert!(motion.is_complete());
        prop_assert_eq!(motion.position(), target);
    }

    #[test]
    fn clamped_velocity_respects_limits(
        vx in -20000.0f32..20000.0,
        vy in -20000.0f32..20000.0,
        min in 0.0f32..500.0,
        extra in 0.0f32..10000.0,
    ) {
        let max = min + extra;
        let clamped = Velocity::new(vx, vy).clamp_magnitude(min, max);
        for (raw, out) in [(vx, clamped.x), (vy, clamped.y)] {
            if out != 0.0 {
                prop_assert!(out.abs() >= min && out.abs() <= max);
                prop_assert_eq!(out.signum(), raw.signum());
            }
        }
    }
}
