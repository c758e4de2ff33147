//! # Yari
//!
//! A content discovery library for article collections.
//!
//! Yari takes an in-memory, already-parsed collection of article records
//! (a corpus snapshot) and derives read-only results from it:
//!
//! - Free-text search with weighted field scoring
//! - Autocomplete suggestions drawn from titles and tags
//! - Pairwise article similarity and "related content" recommendations
//! - Tag statistics with display scaling for tag clouds
//!
//! All operations are pure functions over the snapshot the caller passes
//! in: nothing is cached, persisted, or mutated, so every operation is
//! safe to invoke concurrently against the same snapshot. When the host
//! rebuilds the corpus it must swap to the new snapshot atomically
//! between requests.

pub mod article;
pub mod error;
pub mod recommend;
pub mod search;
pub mod similarity;
pub mod tags;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
