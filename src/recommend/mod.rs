//! Combined related/latest/popular recommendation bundles.

pub mod composer;

// Re-export commonly used types
pub use composer::*;
