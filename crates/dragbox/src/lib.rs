#![forbid(unsafe_code)]

//! dragbox public facade crate.
//!
//! Re-exports the container, controller, and geometry types from the
//! internal crates, plus a prelude for day-to-day usage.
//!
//! ```
//! use dragbox::prelude::*;
//!
//! # fn main() -> dragbox::Result<()> {
//! let mut layout = DragLayout::new(Size::new(300, 300), DragConfig::default())?;
//! let card = layout.add_child(Size::new(100, 100), Gravity::TOP_LEFT)?;
//!
//! layout.on_pointer_event(&PointerEvent::down(1, 10, 10));
//! layout.on_pointer_event(&PointerEvent::moved(1, 400, 10));
//! layout.on_pointer_event(&PointerEvent::up(1, 400, 10));
//!
//! layout.layout();
//! assert_eq!(layout.child(card).map(|c| c.position()), Some(Point::new(200, 0)));
//! # Ok(())
//! # }
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use dragbox_core::animation::{Animation, Decay, SettleMotion, Spring};
pub use dragbox_core::axes::DragAxes;
pub use dragbox_core::event::{PointerEvent, PointerEventKind, Velocity};
pub use dragbox_core::geometry::{Point, Rect, Sides, Size};
pub use dragbox_core::velocity::VelocityTracker;

// --- Layout re-exports -----------------------------------------------------

pub use dragbox_layout::{
    Alignment, ChildId, ChildIdAllocator, ChildNode, DragBounds, FrameLayout, Gravity,
    LayoutError, Offset, OffsetSnapshot, OffsetStore,
};

// --- Widget re-exports -----------------------------------------------------

pub use dragbox_widgets::{
    ChildMovement, ClampToPadding, DragConfig, DragConfigError, DragController, DragDispatch,
    DragHost, DragIgnoredReason, DragLayout, DragOutcome, DragPolicy, DragState,
    FlingWithinPadding, FrameCounter, FrameScheduler, ReleaseAction,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for dragbox containers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Invalid controller configuration.
    Config(DragConfigError),
    /// Child bookkeeping failure.
    Layout(LayoutError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid drag config: {err}"),
            Self::Layout(err) => write!(f, "layout error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Layout(err) => Some(err),
        }
    }
}

impl From<DragConfigError> for Error {
    fn from(err: DragConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<LayoutError> for Error {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

/// Standard result type for dragbox APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ChildId, DragConfig, DragLayout, DragOutcome, DragPolicy, DragState, Error, FrameScheduler,
        Gravity, Point, PointerEvent, ReleaseAction, Result, Sides, Size, Velocity,
    };

    pub use crate::{core, layout, widgets};
}

pub use dragbox_core as core;
pub use dragbox_layout as layout;
pub use dragbox_widgets as widgets;
