//! Swipedrawer Core
//!
//! Shared primitives for the swipedrawer crates: integer geometry, math
//! re-exports, logging setup and profiling hooks.

pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
