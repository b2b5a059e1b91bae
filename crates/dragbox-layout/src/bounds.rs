//! Padded-interior drag bounds.
//!
//! [`DragBounds`] is a value snapshot of the container's size and padding.
//! Hosts rebuild it from their current dimensions for every clamp so a
//! container resize between drags is always observed.
//!
//! # Invariants
//!
//! 1. Clamping hard-stops at the padded edges; there is no overshoot.
//! 2. Clamping is idempotent: `clamp(clamp(x)) == clamp(x)`.
//! 3. When a child is larger than the padded interior the upper limit falls
//!    below the lower one and the clamp degenerates to the padding anchor
//!    (`padding.left` / `padding.top`). This is a valid state, not an error.

use dragbox_core::axes::DragAxes;
use dragbox_core::geometry::{Rect, Sides, Size};

/// Container size plus padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragBounds {
    size: Size,
    padding: Sides,
}

impl DragBounds {
    /// Create bounds from the container size and padding.
    #[must_use]
    pub const fn new(size: Size, padding: Sides) -> Self {
        Self { size, padding }
    }

    /// Container size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Container padding.
    #[must_use]
    pub const fn padding(&self) -> Sides {
        self.padding
    }

    /// The padded interior, in container-local coordinates.
    #[must_use]
    pub fn interior(&self) -> Rect {
        Rect::new(
            i32::from(self.padding.left),
            i32::from(self.padding.top),
            self.size.width.saturating_sub(self.padding.horizontal_sum()),
            self.size.height.saturating_sub(self.padding.vertical_sum()),
        )
    }

    /// Largest left edge a child of `child_width` may take.
    #[must_use]
    pub fn max_left(&self, child_width: u16) -> i32 {
        i32::from(self.size.width) - i32::from(child_width) - i32::from(self.padding.right)
    }

    /// Largest top edge a child of `child_height` may take.
    #[must_use]
    pub fn max_top(&self, child_height: u16) -> i32 {
        i32::from(self.size.height) - i32::from(child_height) - i32::from(self.padding.bottom)
    }

    /// `max(padding.left, min(raw_left, width - child_width - padding.right))`.
    #[must_use]
    pub fn clamp_horizontal(&self, raw_left: i32, child_width: u16) -> i32 {
        raw_left
            .min(self.max_left(child_width))
            .max(i32::from(self.padding.left))
    }

    /// `max(padding.top, min(raw_top, height - child_height - padding.bottom))`.
    #[must_use]
    pub fn clamp_vertical(&self, raw_top: i32, child_height: u16) -> i32 {
        raw_top
            .min(self.max_top(child_height))
            .max(i32::from(self.padding.top))
    }

    /// Horizontal drag range: container width minus child width.
    #[must_use]
    pub fn horizontal_range(&self, child_width: u16) -> i32 {
        i32::from(self.size.width) - i32::from(child_width)
    }

    /// Vertical drag range: container height minus child height.
    #[must_use]
    pub fn vertical_range(&self, child_height: u16) -> i32 {
        i32::from(self.size.height) - i32::from(child_height)
    }

    /// Axes with a positive drag range for a child of `child_size`.
    #[must_use]
    pub fn drag_axes(&self, child_size: Size) -> DragAxes {
        let mut axes = DragAxes::NONE;
        if self.horizontal_range(child_size.width) > 0 {
            axes |= DragAxes::HORIZONTAL;
        }
        if self.vertical_range(child_size.height) > 0 {
            axes |= DragAxes::VERTICAL;
        }
        axes
    }
}
