#![forbid(unsafe_code)]

//! Core: geometry, pointer events, velocity tracking, and settle motion.
//!
//! # Role in dragbox
//! `dragbox-core` is the input and motion layer. It owns the small geometric
//! vocabulary shared by every crate, the normalized pointer event type that
//! hosts translate their native input into, and the physics used to animate
//! a released child.
//!
//! # Primary responsibilities
//! - **Geometry**: [`Point`](geometry::Point), [`Size`](geometry::Size),
//!   [`Rect`](geometry::Rect), [`Sides`](geometry::Sides).
//! - **PointerEvent**: canonical down/move/up/cancel events with pointer ids.
//! - **VelocityTracker**: release velocity estimation from timestamped moves.
//! - **Animation**: spring slides and friction flings for settling.
//!
//! # How it fits in the system
//! `dragbox-layout` builds bounds and offset bookkeeping on these types, and
//! `dragbox-widgets` drives the drag state machine from [`event::PointerEvent`]
//! values.

pub mod animation;
pub mod axes;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod velocity;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace};
