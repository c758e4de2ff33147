//! Tag aggregation and display scaling.
//!
//! This module derives ranked tag statistics from a corpus snapshot and
//! provides the pure scaling helpers used to render tag clouds.

pub mod display;
pub mod index;

// Re-export commonly used types
pub use display::*;
pub use index::*;
