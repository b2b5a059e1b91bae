//! Child identity and frames.

use std::fmt;

use dragbox_core::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Errors raised by child bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// `0` is reserved and never names a child.
    ZeroChildId,
    /// The id allocator ran out of ids.
    ChildIdOverflow { current: ChildId },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroChildId => write!(f, "child id 0 is reserved"),
            Self::ChildIdOverflow { current } => {
                write!(f, "child id allocator overflowed after {}", current.get())
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Stable identifier for a child slot.
///
/// `0` is reserved/invalid so IDs are always non-zero. IDs are never reused
/// by an allocator, so a stale id can never alias a newer child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildId(u64);

impl ChildId {
    /// Lowest valid child ID.
    pub const MIN: Self = Self(1);

    /// Create a new child ID, rejecting 0.
    pub fn new(raw: u64) -> Result<Self, LayoutError> {
        if raw == 0 {
            return Err(LayoutError::ZeroChildId);
        }
        Ok(Self(raw))
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Deterministic, monotonic allocator for child IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildIdAllocator {
    next: ChildId,
}

impl Default for ChildIdAllocator {
    fn default() -> Self {
        Self { next: ChildId::MIN }
    }
}

impl ChildIdAllocator {
    /// Peek at the next ID without consuming.
    #[must_use]
    pub const fn peek(&self) -> ChildId {
        self.next
    }

    /// Allocate the next ID.
    pub fn allocate(&mut self) -> Result<ChildId, LayoutError> {
        let current = self.next;
        let Some(next) = current.0.checked_add(1) else {
            return Err(LayoutError::ChildIdOverflow { current });
        };
        self.next = ChildId(next);
        Ok(current)
    }
}

/// Placement of a child within one axis of the padded interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

/// Natural placement of a child in both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Gravity {
    pub horizontal: Alignment,
    pub vertical: Alignment,
}

impl Gravity {
    /// Top-left placement.
    pub const TOP_LEFT: Self = Self::new(Alignment::Start, Alignment::Start);
    /// Centered in both axes.
    pub const CENTER: Self = Self::new(Alignment::Center, Alignment::Center);
    /// Bottom-right placement.
    pub const BOTTOM_RIGHT: Self = Self::new(Alignment::End, Alignment::End);

    /// Create a new gravity.
    pub const fn new(horizontal: Alignment, vertical: Alignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// A child slot: identity, measured size, current position.
///
/// The measured size is fixed for the slot's lifetime; position is mutated
/// by layout passes and by dragging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildNode {
    id: ChildId,
    size: Size,
    gravity: Gravity,
    position: Point,
}

impl ChildNode {
    /// Create a child at the origin.
    #[must_use]
    pub const fn new(id: ChildId, size: Size, gravity: Gravity) -> Self {
        Self {
            id,
            size,
            gravity,
            position: Point::ORIGIN,
        }
    }

    /// Child identity.
    #[must_use]
    pub const fn id(&self) -> ChildId {
        self.id
    }

    /// Measured size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Natural placement.
    #[must_use]
    pub const fn gravity(&self) -> Gravity {
        self.gravity
    }

    /// Current top-left position.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Current frame.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Move the child to an absolute position.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Translate the child.
    pub fn offset(&mut self, dx: i32, dy: i32) {
        self.position = self.position.offset(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_id_is_rejected() {
        assert_eq!(ChildId::new(0), Err(LayoutError::ZeroChildId));
        assert_eq!(ChildId::new(7).map(ChildId::get), Ok(7));
    }

    #[test]
    fn allocator_is_monotonic() {
        let mut ids = ChildIdAllocator::default();
        let a = ids.allocate().expect("first id");
        let b = ids.allocate().expect("second id");
        assert_eq!(a, ChildId::MIN);
        assert!(b > a);
        assert_eq!(ids.peek().get(), 3);
    }

    #[test]
    fn allocator_reports_overflow() {
        let mut ids = ChildIdAllocator {
            next: ChildId(u64::MAX),
        };
        assert_eq!(
            ids.allocate(),
            Err(LayoutError::ChildIdOverflow {
                current: ChildId(u64::MAX)
            })
        );
    }

    #[test]
    fn child_offset_translates_rect() {
        let mut child = ChildNode::new(ChildId::MIN, Size::new(10, 20), Gravity::default());
        child.offset(5, -3);
        assert_eq!(child.rect(), Rect::new(5, -3, 10, 20));
        child.set_position(Point::new(1, 1));
        assert_eq!(child.position(), Point::new(1, 1));
    }
}
