//! Capture, clamp, and release decisions injected into the controller.
//!
//! A [`DragPolicy`] is a plain value the controller owns; it never reaches
//! into the container. Geometry arrives as arguments on each call.

use dragbox_core::axes::DragAxes;
use dragbox_core::event::Velocity;
use dragbox_core::geometry::{Point, Size};
use dragbox_layout::{ChildId, DragBounds};

use crate::controller::{ChildMovement, DragState};

/// What happens to a child after its pointer is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleaseAction {
    /// The child stays at its last clamped position.
    #[default]
    Stop,
    /// The child slides to the given top-left corner (clamped).
    SettleAt(Point),
    /// The child keeps moving with the release velocity and decelerates,
    /// stopping at the clamp limits.
    Fling,
}

/// Drag decisions for a draggable container.
///
/// Every method has a default matching [`ClampToPadding`].
pub trait DragPolicy {
    /// Whether `child` may be captured by `pointer_id`.
    fn try_capture(&mut self, _child: ChildId, _pointer_id: u32) -> bool {
        true
    }

    /// Actual left edge for a proposed `left`.
    fn clamp_horizontal(
        &self,
        _child: ChildId,
        left: i32,
        child_width: u16,
        bounds: &DragBounds,
    ) -> i32 {
        bounds.clamp_horizontal(left, child_width)
    }

    /// Actual top edge for a proposed `top`.
    fn clamp_vertical(
        &self,
        _child: ChildId,
        top: i32,
        child_height: u16,
        bounds: &DragBounds,
    ) -> i32 {
        bounds.clamp_vertical(top, child_height)
    }

    /// Axes along which `child` can be dragged; gates touch-slop capture.
    fn drag_axes(&self, _child: ChildId, child_size: Size, bounds: &DragBounds) -> DragAxes {
        bounds.drag_axes(child_size)
    }

    /// Called after every non-zero movement step, drag or settle.
    fn on_position_changed(&mut self, _movement: ChildMovement) {}

    /// Called once when the captured child is released.
    fn on_released(&mut self, _child: ChildId, _velocity: Velocity) -> ReleaseAction {
        ReleaseAction::Stop
    }

    /// Called whenever the controller's drag state changes.
    fn on_drag_state_changed(&mut self, _state: DragState) {}
}

/// Capture anything, clamp to the padded interior, never fling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClampToPadding;

impl DragPolicy for ClampToPadding {}

/// Like [`ClampToPadding`], but released children fling and decelerate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlingWithinPadding;

impl DragPolicy for FlingWithinPadding {
    fn on_released(&mut self, _child: ChildId, velocity: Velocity) -> ReleaseAction {
        if velocity.is_zero() {
            ReleaseAction::Stop
        } else {
            ReleaseAction::Fling
        }
    }
}
