//! Free-text search and autocomplete over a corpus snapshot.

pub mod ranker;
pub mod suggest;

// Re-export commonly used types
pub use ranker::*;
pub use suggest::*;
