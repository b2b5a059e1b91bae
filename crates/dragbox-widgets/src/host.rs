//! The container surface the drag controller operates on.

use dragbox_core::geometry::Rect;
use dragbox_layout::{ChildId, DragBounds, OffsetStore};

/// Children, geometry, and offset bookkeeping exposed to [`DragController`].
///
/// The controller never owns children. Every call re-reads geometry through
/// the host, so container resizes between events are always observed.
///
/// [`DragController`]: crate::controller::DragController
pub trait DragHost {
    /// Current container size and padding.
    fn bounds(&self) -> DragBounds;

    /// Topmost child containing the point, if any.
    fn child_at(&self, x: i32, y: i32) -> Option<ChildId>;

    /// Current frame of `child`, or `None` if it is not in the container.
    fn child_rect(&self, child: ChildId) -> Option<Rect>;

    /// Translate `child` by `(dx, dy)`.
    fn offset_child(&mut self, child: ChildId, dx: i32, dy: i32);

    /// Offsets replayed by the container after each layout pass.
    fn offsets_mut(&mut self) -> &mut OffsetStore;
}
