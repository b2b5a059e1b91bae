#![forbid(unsafe_code)]

//! Drag controller and the draggable-children container.
//!
//! # Role in dragbox
//! `dragbox-widgets` turns pointer events into child movement. The
//! [`DragController`] is a single-capture state machine that clamps and
//! records every step; [`DragLayout`] is the container glue that owns the
//! children, runs layout, and replays recorded offsets after every pass.
//!
//! # Seams
//! - [`DragPolicy`]: capture, clamp, and release decisions.
//! - [`DragHost`]: the child surface the controller moves.
//! - [`FrameScheduler`]: the host's "run me again next frame" capability.

pub mod config;
pub mod container;
pub mod controller;
pub mod host;
pub mod policy;
pub mod scheduler;

pub use config::{DragConfig, DragConfigError};
pub use container::DragLayout;
pub use controller::{
    ChildMovement, DragController, DragDispatch, DragIgnoredReason, DragOutcome, DragState,
};
pub use host::DragHost;
pub use policy::{ClampToPadding, DragPolicy, FlingWithinPadding, ReleaseAction};
pub use scheduler::{FrameCounter, FrameScheduler};
