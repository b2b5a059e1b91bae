#![forbid(unsafe_code)]

//! Layout primitives for draggable containers.
//!
//! - [`ChildId`] / [`ChildNode`]: stable child identity and frame.
//! - [`DragBounds`]: padded-interior clamp math, rebuilt from the container
//!   on every call.
//! - [`OffsetStore`]: cumulative per-child drag offsets replayed after each
//!   layout pass.
//! - [`FrameLayout`]: the natural (offset-free) placement of children.

pub mod bounds;
pub mod child;
pub mod frame_layout;
pub mod offset_store;

pub use bounds::DragBounds;
pub use child::{Alignment, ChildId, ChildIdAllocator, ChildNode, Gravity, LayoutError};
pub use dragbox_core::geometry::{Point, Rect, Sides, Size};
pub use frame_layout::FrameLayout;
pub use offset_store::{Offset, OffsetSnapshot, OffsetStore};
