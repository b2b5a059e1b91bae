#![forbid(unsafe_code)]

//! Drag axis flags.

use bitflags::bitflags;

bitflags! {
    /// Axes along which a child can move.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DragAxes: u8 {
        /// Neither axis.
        const NONE       = 0b00;
        /// Left/right movement.
        const HORIZONTAL = 0b01;
        /// Up/down movement.
        const VERTICAL   = 0b10;
        /// Both axes.
        const BOTH = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

impl Default for DragAxes {
    fn default() -> Self {
        Self::NONE
    }
}

impl DragAxes {
    /// Whether a pointer travel of `(dx, dy)` exceeds `slop` along the
    /// enabled axes.
    ///
    /// With both axes enabled the euclidean distance is compared; with one
    /// axis only that component counts. With no axes nothing ever exceeds.
    #[must_use]
    pub fn exceeds_slop(self, dx: i32, dy: i32, slop: u16) -> bool {
        let slop = i64::from(slop);
        let (dx, dy) = (i64::from(dx), i64::from(dy));
        if self.contains(Self::BOTH) {
            dx * dx + dy * dy > slop * slop
        } else if self.contains(Self::HORIZONTAL) {
            dx.abs() > slop
        } else if self.contains(Self::VERTICAL) {
            dy.abs() > slop
        } else {
            false
        }
    }
}
