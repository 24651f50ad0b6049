//! Request middleware.
//!
//! Purpose: define middleware components for request lifecycle concerns such
//! as response timing.

pub mod timing;

pub use timing::{ELAPSED_TIME_HEADER, Timing};
