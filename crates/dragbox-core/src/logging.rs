#![forbid(unsafe_code)]

//! Logging shims.
//!
//! With the `tracing` feature enabled the `debug!` and `trace!` macros
//! are the real `tracing` macros. Without it they expand to nothing,
//! so call sites never need their own `cfg` guard.
//!
//! Downstream crates import them from the crate root:
//!
//! ```ignore
//! use dragbox_core::{debug, trace};
//! ```

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

/// No-op `debug!` used when the `tracing` feature is disabled.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

/// No-op `trace!` used when the `tracing` feature is disabled.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
