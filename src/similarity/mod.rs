//! Pairwise article similarity and related-content recommendations.

pub mod related;
pub mod scorer;

// Re-export commonly used types
pub use related::*;
pub use scorer::*;
