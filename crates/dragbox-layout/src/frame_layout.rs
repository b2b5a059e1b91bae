//! Natural child placement.
//!
//! [`FrameLayout`] stacks every child inside the padded interior according
//! to its [`Gravity`], ignoring any drag offset. A child larger than the
//! interior is anchored at the padding start for `Start` and `Center`, and
//! flush with the far padding edge for `End`.

use crate::bounds::DragBounds;
use crate::child::{Alignment, ChildNode};
use dragbox_core::geometry::Point;

/// Stacked, gravity-aligned placement.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameLayout;

impl FrameLayout {
    /// Create the layout engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Reset every child to its natural position within `bounds`.
    pub fn layout(&self, bounds: &DragBounds, children: &mut [ChildNode]) {
        for child in children {
            child.set_position(self.natural_position(bounds, child));
        }
    }

    /// The offset-free position of `child` within `bounds`.
    #[must_use]
    pub fn natural_position(&self, bounds: &DragBounds, child: &ChildNode) -> Point {
        let interior = bounds.interior();
        let size = child.size();
        let gravity = child.gravity();
        Point::new(
            align(
                gravity.horizontal,
                interior.left(),
                i32::from(interior.width),
                i32::from(size.width),
            ),
            align(
                gravity.vertical,
                interior.top(),
                i32::from(interior.height),
                i32::from(size.height),
            ),
        )
    }
}

fn align(alignment: Alignment, start: i32, available: i32, extent: i32) -> i32 {
    let slack = available - extent;
    match alignment {
        Alignment::Start => start,
        Alignment::Center => start + (slack / 2).max(0),
        Alignment::End => start + slack,
    }
}
