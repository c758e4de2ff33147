//! Article record structure consumed by every query operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, YariError};

/// A single article in a corpus snapshot.
///
/// Records are owned by the host: yari only ever reads them. Within one
/// snapshot the `id` uniquely identifies a record, and the snapshot is
/// treated as a frozen sequence for the duration of any single query.
///
/// `description` and `tags` are optional containers rather than empty
/// defaults so that the scoring formulas can distinguish an absent field
/// from a present-but-empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Stable unique identifier (opaque to yari).
    pub id: String,
    /// Article title, non-empty.
    pub title: String,
    /// Publication instant, at least day resolution.
    pub published_at: DateTime<Utc>,
    /// Optional summary text.
    pub description: Option<String>,
    /// Optional ordered sequence of distinct tag labels.
    pub tags: Option<Vec<String>>,
}

impl ArticleRecord {
    /// Create a builder for constructing records.
    pub fn builder<S: Into<String>, T: Into<String>>(
        id: S,
        title: T,
        published_at: DateTime<Utc>,
    ) -> ArticleRecordBuilder {
        ArticleRecordBuilder {
            id: id.into(),
            title: title.into(),
            published_at,
            description: None,
            tags: None,
        }
    }

    /// The record's tags, or an empty slice when absent.
    pub fn tag_slice(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    /// Whether the record carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag_slice().iter().any(|t| t == tag)
    }
}

/// Builder for [`ArticleRecord`], enforcing structural invariants.
#[derive(Debug)]
pub struct ArticleRecordBuilder {
    id: String,
    title: String,
    published_at: DateTime<Utc>,
    description: Option<String>,
    tags: Option<Vec<String>>,
}

impl ArticleRecordBuilder {
    /// Set the description text.
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the tag list.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Build the final record.
    ///
    /// Fails when `id` or `title` is empty; these are caller-programming
    /// errors that must be prevented upstream, not recoverable states.
    pub fn build(self) -> Result<ArticleRecord> {
        if self.id.is_empty() {
            return Err(YariError::record("record id must be non-empty"));
        }
        if self.title.is_empty() {
            return Err(YariError::record("record title must be non-empty"));
        }

        Ok(ArticleRecord {
            id: self.id,
            title: self.title,
            published_at: self.published_at,
            description: self.description,
            tags: self.tags,
        })
    }
}
