#![forbid(unsafe_code)]

//! Core primitives for the loft flow layout engine: geometry, gravity
//! attributes, and measurement constraints.

pub mod geometry;
pub mod gravity;
pub mod logging;
pub mod measure;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
