//! Weighted similarity scoring between two articles.
//!
//! The score blends four non-negative contributions: tag overlap, time
//! proximity, title token overlap, and description token overlap. The
//! sum is clamped to 1. Note that `similarity(a, a) == 1` is not a law
//! of this formula: short titles and sparse fields can keep even a
//! record's self-similarity below 1.

use ahash::AHashSet;
use chrono::Datelike;

use crate::article::ArticleRecord;

/// Weight of the Jaccard tag-overlap term.
pub const TAG_OVERLAP_WEIGHT: f64 = 0.5;
/// Bonus when two records were published within 30 days of each other.
pub const RECENT_PROXIMITY_BONUS: f64 = 0.2;
/// Bonus when two records share a calendar year but not the 30-day window.
pub const SAME_YEAR_BONUS: f64 = 0.1;
/// Weight of the title token-overlap term.
pub const TITLE_OVERLAP_WEIGHT: f64 = 0.2;
/// Weight of the description token-overlap term.
pub const DESCRIPTION_OVERLAP_WEIGHT: f64 = 0.1;

/// Publication-distance window for [`TimeBucket::Recent`], in seconds.
const RECENT_WINDOW_SECONDS: i64 = 30 * 24 * 60 * 60;

/// Which time-proximity bucket a pair of records falls into.
///
/// The buckets are mutually exclusive: a pair inside the 30-day window
/// never also counts as same-year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBucket {
    /// Published within 30 days of each other.
    Recent,
    /// Published in the same calendar year, outside the 30-day window.
    SameYear,
}

/// Classify the publication distance between two records.
pub fn time_bucket(a: &ArticleRecord, b: &ArticleRecord) -> Option<TimeBucket> {
    let diff = (a.published_at - b.published_at).num_seconds().abs();
    if diff <= RECENT_WINDOW_SECONDS {
        Some(TimeBucket::Recent)
    } else if a.published_at.year() == b.published_at.year() {
        Some(TimeBucket::SameYear)
    } else {
        None
    }
}

/// Similarity between two records, in `[0, 1]`.
///
/// - Tag overlap: Jaccard index of the two tag sets, weight 0.5; zero
///   when either record has no tags.
/// - Time proximity: 0.2 within 30 days, else 0.1 for the same year.
/// - Title overlap: shared tokens longer than two characters divided by
///   the longer token list, weight 0.2.
/// - Description overlap: same method, weight 0.1, when both present.
pub fn similarity(a: &ArticleRecord, b: &ArticleRecord) -> f64 {
    let mut score = tag_overlap(a, b) * TAG_OVERLAP_WEIGHT;

    score += match time_bucket(a, b) {
        Some(TimeBucket::Recent) => RECENT_PROXIMITY_BONUS,
        Some(TimeBucket::SameYear) => SAME_YEAR_BONUS,
        None => 0.0,
    };

    score += token_overlap(&a.title, &b.title) * TITLE_OVERLAP_WEIGHT;

    if let (Some(desc_a), Some(desc_b)) = (&a.description, &b.description) {
        score += token_overlap(desc_a, desc_b) * DESCRIPTION_OVERLAP_WEIGHT;
    }

    score.min(1.0)
}

/// Jaccard index of the two tag sets; zero when either is empty.
fn tag_overlap(a: &ArticleRecord, b: &ArticleRecord) -> f64 {
    let tags_a = a.tag_slice();
    let tags_b = b.tag_slice();
    if tags_a.is_empty() || tags_b.is_empty() {
        return 0.0;
    }

    let set_a: AHashSet<&str> = tags_a.iter().map(String::as_str).collect();
    let set_b: AHashSet<&str> = tags_b.iter().map(String::as_str).collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    intersection as f64 / union as f64
}

/// Shared-token ratio of two texts.
///
/// Tokens are lowercased whitespace splits. The shared count is a set
/// membership test over tokens longer than two characters (multiplicity
/// ignored); the denominator is the longer raw token list, which keeps
/// the ratio symmetric.
fn token_overlap(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let tokens_a: Vec<&str> = a.split_whitespace().collect();
    let tokens_b: Vec<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let set_a: AHashSet<&str> = tokens_a.iter().copied().collect();
    let set_b: AHashSet<&str> = tokens_b.iter().copied().collect();
    let shared = set_a
        .iter()
        .filter(|token| token.chars().count() > 2 && set_b.contains(**token))
        .count();

    if shared == 0 {
        return 0.0;
    }

    shared as f64 / tokens_a.len().max(tokens_b.len()) as f64
}
