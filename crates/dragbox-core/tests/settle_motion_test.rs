//! Integration tests for two-axis settle motion.

use dragbox_core::animation::{Animation, SettleMotion};
use dragbox_core::event::Velocity;
use dragbox_core::geometry::Point;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn run_to_completion(motion: &mut SettleMotion, max_frames: usize) -> usize {
    let mut frames = 0;
    while !motion.is_complete() && frames < max_frames {
        motion.tick(FRAME);
        frames += 1;
    }
    frames
}

#[test]
fn slide_ends_exactly_on_target() {
    let mut motion = SettleMotion::slide(Point::new(10, 40), Point::new(150, 0));
    assert_eq!(motion.final_position(), Point::new(150, 0));
    let frames = run_to_completion(&mut motion, 600);
    assert!(frames < 600, "slide should settle");
    assert_eq!(motion.position(), Point::new(150, 0));
}

#[test]
fn slide_to_same_point_is_complete() {
    let motion = SettleMotion::slide(Point::new(5, 5), Point::new(5, 5));
    assert!(motion.is_complete());
    assert_eq!(motion.position(), Point::new(5, 5));
}

#[test]
fn fling_is_confined_to_corner_range() {
    let mut motion = SettleMotion::fling(
        Point::new(50, 50),
        Velocity::new(6000.0, -6000.0),
        4.0,
        Point::new(0, 0),
        Point::new(200, 300),
    );
    run_to_completion(&mut motion, 600);
    assert!(motion.is_complete());
    assert_eq!(motion.position(), Point::new(200, 0));
}

#[test]
fn fling_axes_complete_independently() {
    let mut motion = SettleMotion::fling(
        Point::new(0, 0),
        Velocity::new(800.0, 0.0),
        4.0,
        Point::new(0, 0),
        Point::new(1000, 1000),
    );
    motion.tick(FRAME);
    assert_eq!(motion.position().y, 0);
    assert!(motion.position().x > 0);
    run_to_completion(&mut motion, 600);
    assert_eq!(motion.position(), Point::new(200, 0));
}

#[test]
fn zero_velocity_fling_is_still() {
    let motion = SettleMotion::fling(
        Point::new(30, 30),
        Velocity::ZERO,
        4.0,
        Point::new(0, 0),
        Point::new(100, 100),
    );
    assert!(motion.is_complete());
    assert_eq!(motion.final_position(), Point::new(30, 30));
}

#[test]
fn reset_restarts_slide() {
    let mut motion = SettleMotion::slide(Point::new(0, 0), Point::new(100, 0));
    run_to_completion(&mut motion, 600);
    motion.reset();
    assert_eq!(motion.position(), Point::new(0, 0));
    assert!(!motion.is_complete());
}
