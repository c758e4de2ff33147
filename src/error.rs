//! Error types for the Yari library.
//!
//! The query operations in this crate are infallible: any structurally
//! valid corpus produces a defined (possibly empty) result. Errors only
//! arise when a caller violates a structural precondition, which happens
//! at record-construction time via [`crate::article::ArticleRecordBuilder`].

use anyhow;
use thiserror::Error;

/// The main error type for Yari operations.
#[derive(Error, Debug)]
pub enum YariError {
    /// A record violates a structural invariant (empty id, empty title).
    #[error("Record error: {0}")]
    Record(String),

    /// A caller-supplied argument violates a precondition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with YariError.
pub type Result<T> = std::result::Result<T, YariError>;

impl YariError {
    /// Create a new record error.
    pub fn record<S: Into<String>>(msg: S) -> Self {
        YariError::Record(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        YariError::InvalidArgument(msg.into())
    }
}
