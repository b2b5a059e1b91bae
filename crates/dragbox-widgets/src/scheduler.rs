//! Frame requests for settle animation.

/// Something that can run the container's `compute_scroll` again on the next
/// display frame.
pub trait FrameScheduler {
    /// Ask for one more frame.
    fn request_frame(&mut self);
}

impl<F: FnMut()> FrameScheduler for F {
    fn request_frame(&mut self) {
        self()
    }
}

/// Scheduler that only counts requests. Useful for headless hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCounter {
    requested: u64,
}

impl FrameCounter {
    /// Create a counter with no requests.
    #[must_use]
    pub const fn new() -> Self {
        Self { requested: 0 }
    }

    /// Total frames requested so far.
    #[must_use]
    pub const fn requested(&self) -> u64 {
        self.requested
    }
}

impl FrameScheduler for FrameCounter {
    fn request_frame(&mut self) {
        self.requested = self.requested.saturating_add(1);
    }
}
