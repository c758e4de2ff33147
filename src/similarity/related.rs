//! Related-content recommendations derived from pairwise similarity.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::article::ArticleRecord;
use crate::similarity::scorer::{TimeBucket, similarity, time_bucket};

/// Scores above this are explainable even without a shared tag or time
/// bucket, and get a generic reason attached.
const GENERIC_RELEVANCE_THRESHOLD: f64 = 0.3;

/// Symbolic justification for why a record was recommended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    /// The records share these tags (in the target's tag order).
    SharedTags(Vec<String>),
    /// Published within 30 days of the target.
    RecentProximity,
    /// Published in the same calendar year as the target.
    SameYear,
    /// Scored well without any other reason firing.
    GenericRelevance,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::SharedTags(tags) => write!(f, "shared tags: {}", tags.join(", ")),
            Reason::RecentProximity => write!(f, "published around the same time"),
            Reason::SameYear => write!(f, "published the same year"),
            Reason::GenericRelevance => write!(f, "related content"),
        }
    }
}

/// One related-content recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationEntry<'a> {
    /// The recommended record.
    pub record: &'a ArticleRecord,
    /// Similarity to the target, in `[0, 1]`.
    pub score: f64,
    /// Justifications, most specific first.
    pub reasons: Vec<Reason>,
}

/// Configuration for related-record selection.
#[derive(Debug, Clone, Copy)]
pub struct RelatedConfig {
    /// Maximum number of recommendations to return.
    pub limit: usize,
    /// Entries scoring at or below this are dropped.
    pub min_score: f64,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        RelatedConfig {
            limit: 5,
            min_score: 0.1,
        }
    }
}

/// Records related to `target`, with the default config.
pub fn related_records<'a>(
    target: &ArticleRecord,
    corpus: &'a [ArticleRecord],
) -> Vec<RecommendationEntry<'a>> {
    related_records_with_config(target, corpus, RelatedConfig::default())
}

/// Records related to `target`, ranked by similarity.
///
/// The target itself (matched by `id`) is never included. Every other
/// record is scored, annotated with reasons, filtered to scores strictly
/// above `min_score`, sorted descending (stable, so ties keep corpus
/// order), and truncated to `limit`.
pub fn related_records_with_config<'a>(
    target: &ArticleRecord,
    corpus: &'a [ArticleRecord],
    config: RelatedConfig,
) -> Vec<RecommendationEntry<'a>> {
    let mut entries: Vec<RecommendationEntry> = corpus
        .iter()
        .filter(|record| record.id != target.id)
        .map(|record| {
            let score = similarity(target, record);
            RecommendationEntry {
                record,
                score,
                reasons: reasons_for(target, record, score),
            }
        })
        .filter(|entry| entry.score > config.min_score)
        .collect();

    entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    entries.truncate(config.limit);
    entries
}

/// Build the justification list for one scored pair.
fn reasons_for(target: &ArticleRecord, other: &ArticleRecord, score: f64) -> Vec<Reason> {
    let mut reasons = Vec::new();

    let shared: Vec<String> = target
        .tag_slice()
        .iter()
        .filter(|tag| other.has_tag(tag))
        .cloned()
        .collect();
    if !shared.is_empty() {
        reasons.push(Reason::SharedTags(shared));
    }

    match time_bucket(target, other) {
        Some(TimeBucket::Recent) => reasons.push(Reason::RecentProximity),
        Some(TimeBucket::SameYear) => reasons.push(Reason::SameYear),
        None => {}
    }

    if score > GENERIC_RELEVANCE_THRESHOLD && reasons.is_empty() {
        reasons.push(Reason::GenericRelevance);
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn record(id: &str, title: &str, published_at: DateTime<Utc>, tags: &[&str]) -> ArticleRecord {
        let mut builder = ArticleRecord::builder(id, title, published_at);
        if !tags.is_empty() {
            builder = builder.tags(tags.iter().copied());
        }
        builder.build().unwrap()
    }

    fn corpus() -> Vec<ArticleRecord> {
        vec![
            record("t", "rust ownership explained", date(2024, 6, 1), &["rust", "memory"]),
            record("a", "rust borrowing explained", date(2024, 6, 10), &["rust", "memory"]),
            record("b", "rust tooling survey", date(2024, 10, 1), &["rust"]),
            record("c", "sourdough starters", date(2019, 1, 1), &["baking"]),
        ]
    }

    #[test]
    fn test_target_is_excluded() {
        let corpus = corpus();
        let related = related_records(&corpus[0], &corpus);
        assert!(related.iter().all(|entry| entry.record.id != "t"));
    }

    #[test]
    fn test_low_scores_are_filtered() {
        let corpus = corpus();
        let related = related_records(&corpus[0], &corpus);

        assert!(related.iter().all(|entry| entry.score > 0.1));
        assert!(related.iter().all(|entry| entry.record.id != "c"));
    }

    #[test]
    fn test_ranked_descending_with_reasons() {
        let corpus = corpus();
        let related = related_records(&corpus[0], &corpus);

        assert_eq!(related.len(), 2);
        assert_eq!(related[0].record.id, "a");
        assert_eq!(related[1].record.id, "b");
        assert!(related[0].score >= related[1].score);

        assert_eq!(
            related[0].reasons,
            vec![
                Reason::SharedTags(vec!["rust".to_string(), "memory".to_string()]),
                Reason::RecentProximity,
            ]
        );
        assert_eq!(
            related[1].reasons,
            vec![Reason::SharedTags(vec!["rust".to_string()]), Reason::SameYear]
        );
    }

    #[test]
    fn test_generic_relevance_threshold_is_strict() {
        // Without shared tags or a time bucket the score caps at exactly
        // 0.3 (title 0.2 + description 0.1), which does not clear
        // the strict > 0.3 threshold: the entry survives the min-score
        // filter with an empty reason list.
        let target = ArticleRecord::builder("t", "deep neural network compression", date(2024, 1, 1))
            .description("pruning and quantization techniques")
            .build()
            .unwrap();
        let other = ArticleRecord::builder("o", "deep neural network compression", date(2021, 1, 1))
            .description("pruning and quantization techniques")
            .build()
            .unwrap();

        let corpus = vec![other];
        let related = related_records(&target, &corpus);

        assert_eq!(related.len(), 1);
        assert!((related[0].score - 0.3).abs() < 1e-9);
        assert!(related[0].reasons.is_empty());
    }

    #[test]
    fn test_limit_truncates() {
        let corpus = corpus();
        let config = RelatedConfig {
            limit: 1,
            ..RelatedConfig::default()
        };
        let related = related_records_with_config(&corpus[0], &corpus, config);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].record.id, "a");
    }

    #[test]
    fn test_empty_corpus() {
        let target = record("t", "alone", date(2024, 1, 1), &[]);
        assert!(related_records(&target, &[]).is_empty());
    }

    #[test]
    fn test_reason_display() {
        let reason = Reason::SharedTags(vec!["rust".to_string(), "memory".to_string()]);
        assert_eq!(reason.to_string(), "shared tags: rust, memory");
        assert_eq!(Reason::RecentProximity.to_string(), "published around the same time");
    }
}
