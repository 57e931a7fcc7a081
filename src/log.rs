//! Logging shims.
//!
//! Diagnostics go through `tracing`, but only when the `tracing` feature is
//! on; otherwise the macros below compile away entirely so the render path
//! carries no logging cost.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
