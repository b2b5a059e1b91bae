#![forbid(unsafe_code)]

//! [`DragLayout`]: a frame container whose children can be dragged.
//!
//! The container owns its children, the [`OffsetStore`], and a
//! [`DragController`]. The controller borrows everything else through a
//! short-lived [`DragHost`] view built per call, so it never holds a
//! reference into the container between events.
//!
//! Layout runs in two phases:
//! 1. [`FrameLayout`] places every child at its natural position.
//! 2. Every stored offset is replayed onto its child.
//!
//! Without phase 2 a resize would silently undo all prior dragging.

use dragbox_core::debug;
use dragbox_core::event::PointerEvent;
use dragbox_core::geometry::{Rect, Sides, Size};
use dragbox_layout::{
    ChildId, ChildIdAllocator, ChildNode, DragBounds, FrameLayout, Gravity, LayoutError,
    OffsetStore,
};

use crate::config::{DragConfig, DragConfigError};
use crate::controller::{DragController, DragDispatch, DragState};
use crate::host::DragHost;
use crate::policy::{ClampToPadding, DragPolicy};
use crate::scheduler::FrameScheduler;

/// Split borrow of a [`DragLayout`] handed to the controller.
struct LayoutHost<'a> {
    bounds: DragBounds,
    children: &'a mut [ChildNode],
    offsets: &'a mut OffsetStore,
}

impl DragHost for LayoutHost<'_> {
    fn bounds(&self) -> DragBounds {
        self.bounds
    }

    fn child_at(&self, x: i32, y: i32) -> Option<ChildId> {
        // Later children paint on top.
        self.children
            .iter()
            .rev()
            .find(|child| child.rect().contains(x, y))
            .map(ChildNode::id)
    }

    fn child_rect(&self, child: ChildId) -> Option<Rect> {
        self.children
            .iter()
            .find(|node| node.id() == child)
            .map(ChildNode::rect)
    }

    fn offset_child(&mut self, child: ChildId, dx: i32, dy: i32) {
        if let Some(node) = self.children.iter_mut().find(|node| node.id() == child) {
            node.offset(dx, dy);
        }
    }

    fn offsets_mut(&mut self) -> &mut OffsetStore {
        self.offsets
    }
}

/// Container that lets its immediate children be dragged within its padded
/// bounds, keeping drag offsets across layout passes.
#[derive(Debug, Clone)]
pub struct DragLayout<P = ClampToPadding> {
    size: Size,
    padding: Sides,
    children: Vec<ChildNode>,
    ids: ChildIdAllocator,
    offsets: OffsetStore,
    engine: FrameLayout,
    controller: DragController<P>,
}

impl DragLayout<ClampToPadding> {
    /// Create an empty container of `size` with the default policy.
    pub fn new(size: Size, config: DragConfig) -> Result<Self, DragConfigError> {
        Self::with_policy(size, ClampToPadding, config)
    }
}

impl<P: DragPolicy> DragLayout<P> {
    /// Create an empty container of `size` with a custom policy.
    pub fn with_policy(size: Size, policy: P, config: DragConfig) -> Result<Self, DragConfigError> {
        Ok(Self {
            size,
            padding: Sides::default(),
            children: Vec::new(),
            ids: ChildIdAllocator::default(),
            offsets: OffsetStore::new(),
            engine: FrameLayout::new(),
            controller: DragController::with_policy(policy, config)?,
        })
    }

    /// Set the padding at construction time.
    #[must_use]
    pub fn with_padding(mut self, padding: impl Into<Sides>) -> Self {
        self.padding = padding.into();
        self
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

    /// Current clamp bounds.
    #[must_use]
    pub const fn bounds(&self) -> DragBounds {
        DragBounds::new(self.size, self.padding)
    }

    /// Resize the container and re-run layout.
    pub fn set_size(&mut self, size: Size) {
        if self.size != size {
            self.size = size;
            self.layout();
        }
    }

    /// Change the padding and re-run layout.
    pub fn set_padding(&mut self, padding: impl Into<Sides>) {
        let padding = padding.into();
        if self.padding != padding {
            self.padding = padding;
            self.layout();
        }
    }

    /// Append a child on top of the others, placed at its natural position.
    pub fn add_child(&mut self, size: Size, gravity: Gravity) -> Result<ChildId, LayoutError> {
        let id = self.ids.allocate()?;
        let mut node = ChildNode::new(id, size, gravity);
        node.set_position(self.engine.natural_position(&self.bounds(), &node));
        self.children.push(node);
        debug!(child = id.get(), "child added");
        Ok(id)
    }

    /// Remove a child, dropping its stored offset and any drag on it.
    pub fn remove_child(&mut self, id: ChildId) -> Option<ChildNode> {
        let index = self.children.iter().position(|node| node.id() == id)?;
        let node = self.children.remove(index);
        if self.offsets.remove(id).is_some() {
            debug!(child = id.get(), "stale offset pruned");
        }
        self.controller.child_removed(id);
        Some(node)
    }

    /// The child with `id`.
    #[must_use]
    pub fn child(&self, id: ChildId) -> Option<&ChildNode> {
        self.children.iter().find(|node| node.id() == id)
    }

    /// Children in paint order, bottom first.
    #[must_use]
    pub fn children(&self) -> &[ChildNode] {
        &self.children
    }

    /// Stored drag offsets.
    #[must_use]
    pub const fn offsets(&self) -> &OffsetStore {
        &self.offsets
    }

    /// Replace the stored offsets, e.g. from a snapshot, and re-run layout.
    /// Entries for unknown children are dropped.
    pub fn restore_offsets(&mut self, offsets: OffsetStore) {
        self.offsets = offsets;
        let children = &self.children;
        self.offsets.retain(|id| children.iter().any(|node| node.id() == id));
        self.layout();
    }

    /// Forget every drag offset and return children to their natural
    /// positions.
    pub fn reset_offsets(&mut self) {
        self.controller.abort(&mut LayoutHost {
            bounds: DragBounds::new(self.size, self.padding),
            children: &mut self.children,
            offsets: &mut self.offsets,
        });
        self.offsets.clear();
        self.layout();
    }

    /// The drag controller.
    #[must_use]
    pub const fn controller(&self) -> &DragController<P> {
        &self.controller
    }

    /// Current drag state.
    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.controller.state()
    }

    /// Whether a released child is still animating.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.controller.is_settling()
    }

    /// Natural layout followed by offset replay.
    pub fn layout(&mut self) {
        let bounds = self.bounds();
        self.engine.layout(&bounds, &mut self.children);
        let children = &mut self.children;
        self.offsets.for_each(|id, offset| {
            if let Some(node) = children.iter_mut().find(|node| node.id() == id) {
                node.offset(offset.dx, offset.dy);
            }
        });
    }

    /// Whether the container wants to take over the gesture `event` is in.
    pub fn on_intercept_event(&mut self, event: &PointerEvent) -> bool {
        let (controller, mut host) = self.split();
        controller.begin_intercept(event, &mut host)
    }

    /// Feed a pointer event to the controller and report what it did.
    pub fn dispatch_pointer_event(&mut self, event: &PointerEvent) -> DragDispatch {
        let (controller, mut host) = self.split();
        controller.process_event(event, &mut host)
    }

    /// Feed a pointer event to the controller. Always consumes the event.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        self.dispatch_pointer_event(event);
        true
    }

    /// Per-frame hook: advance settling and ask `scheduler` for another frame
    /// while it continues. Returns whether a frame was requested.
    pub fn compute_scroll(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        let (controller, mut host) = self.split();
        let more = controller.tick(&mut host);
        if more {
            scheduler.request_frame();
        }
        more
    }

    /// Slide `child` to `(left, top)` (clamped) over the coming frames.
    pub fn smooth_slide_to(&mut self, child: ChildId, left: i32, top: i32) -> bool {
        let (controller, mut host) = self.split();
        controller.smooth_slide_to(child, left, top, &mut host)
    }

    /// Stop any settle motion at its final position.
    pub fn abort(&mut self) {
        let (controller, mut host) = self.split();
        controller.abort(&mut host);
    }

    fn split(&mut self) -> (&mut DragController<P>, LayoutHost<'_>) {
        let bounds = DragBounds::new(self.size, self.padding);
        (
            &mut self.controller,
            LayoutHost {
                bounds,
                children: &mut self.children,
                offsets: &mut self.offsets,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragbox_core::geometry::Point;
    use dragbox_layout::Offset;

    fn layout_300() -> DragLayout {
        DragLayout::new(Size::new(300, 300), DragConfig::default())
            .expect("default config should be valid")
    }

    #[test]
    fn added_child_sits_at_natural_position() {
        let mut layout = layout_300().with_padding(Sides::all(10));
        let id = layout
            .add_child(Size::new(100, 100), Gravity::CENTER)
            .expect("id available");
        assert_eq!(
            layout.child(id).map(ChildNode::position),
            Some(Point::new(100, 100))
        );
    }

    #[test]
    fn topmost_child_wins_hit_test() {
        let mut layout = layout_300();
        let bottom = layout
            .add_child(Size::new(100, 100), Gravity::TOP_LEFT)
            .expect("id available");
        let top = layout
            .add_child(Size::new(100, 100), Gravity::TOP_LEFT)
            .expect("id available");
        layout.on_pointer_event(&PointerEvent::down(1, 50, 50));
        layout.on_pointer_event(&PointerEvent::moved(1, 60, 50));
        assert_eq!(layout.offsets().get(top), Some(Offset::new(10, 0)));
        assert_eq!(layout.offsets().get(bottom), None);
    }

    #[test]
    fn remove_child_prunes_offset_and_session() {
        let mut layout = layout_300();
        let id = layout
            .add_child(Size::new(100, 100), Gravity::TOP_LEFT)
            .expect("id available");
        layout.on_pointer_event(&PointerEvent::down(1, 10, 10));
        layout.on_pointer_event(&PointerEvent::moved(1, 30, 10));
        assert!(layout.remove_child(id).is_some());
        assert!(layout.offsets().is_empty());
        assert_eq!(layout.drag_state(), DragState::Idle);
        assert!(layout.remove_child(id).is_none());
    }

    #[test]
    fn reset_offsets_returns_children_home() {
        let mut layout = layout_300();
        let id = layout
            .add_child(Size::new(100, 100), Gravity::TOP_LEFT)
            .expect("id available");
        layout.on_pointer_event(&PointerEvent::down(1, 10, 10));
        layout.on_pointer_event(&PointerEvent::moved(1, 40, 25));
        layout.reset_offsets();
        assert_eq!(layout.child(id).map(ChildNode::position), Some(Point::ORIGIN));
        assert!(layout.offsets().is_empty());
    }

    #[test]
    fn restore_offsets_drops_unknown_children() {
        let mut layout = layout_300();
        let id = layout
            .add_child(Size::new(100, 100), Gravity::TOP_LEFT)
            .expect("id available");
        let mut offsets = OffsetStore::new();
        offsets.accumulate(id, 40, 5);
        offsets.accumulate(ChildId::new(77).expect("non-zero"), 1, 1);
        layout.restore_offsets(offsets);
        assert_eq!(layout.offsets().len(), 1);
        assert_eq!(
            layout.child(id).map(ChildNode::position),
            Some(Point::new(40, 5))
        );
    }
}
