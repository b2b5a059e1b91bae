#![forbid(unsafe_code)]

//! Settle animations.
//!
//! Every animation advances by an explicit `Duration`; nothing here reads a
//! clock. The drag controller ticks one frame interval per host frame.

pub mod decay;
pub mod settle;
pub mod spring;

use std::time::Duration;

pub use decay::Decay;
pub use settle::SettleMotion;
pub use spring::Spring;

/// A time-driven animation.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation reached its final state.
    fn is_complete(&self) -> bool;

    /// Return to the initial state.
    fn reset(&mut self);
}
