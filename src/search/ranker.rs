//! Weighted field scoring for free-text queries.

use serde::{Deserialize, Serialize};

use crate::article::ArticleRecord;

/// Score contribution when the query matches the title.
pub const TITLE_WEIGHT: u32 = 100;
/// Score contribution when the query matches the description.
pub const DESCRIPTION_WEIGHT: u32 = 50;
/// Score contribution per tag the query matches.
pub const TAG_WEIGHT: u32 = 30;

/// Which fields of a record matched the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchedFields {
    /// The query is a substring of the title.
    pub title: bool,
    /// The query is a substring of the description.
    pub description: bool,
    /// The query is a substring of at least one tag.
    pub tags: bool,
}

/// One search result: a record, its score, and the fields that matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    /// The matching record.
    pub record: &'a ArticleRecord,
    /// Accumulated field-weight score, always positive.
    pub score: u32,
    /// The fields the query was found in.
    pub matched: MatchedFields,
}

/// Score and rank the corpus against a free-text query.
///
/// Matching is case-insensitive substring containment. A title match
/// scores 100, a description match 50, and every matching tag another
/// 30. Records that match nothing are omitted, and a blank query yields
/// no hits at all. Hits are ordered by score descending; equal scores
/// keep their relative corpus order.
pub fn search<'a>(query: &str, corpus: &'a [ArticleRecord]) -> Vec<SearchHit<'a>> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = Vec::new();

    for record in corpus {
        let mut score = 0;
        let mut matched = MatchedFields::default();

        if record.title.to_lowercase().contains(&term) {
            score += TITLE_WEIGHT;
            matched.title = true;
        }

        if let Some(description) = &record.description {
            if description.to_lowercase().contains(&term) {
                score += DESCRIPTION_WEIGHT;
                matched.description = true;
            }
        }

        for tag in record.tag_slice() {
            if tag.to_lowercase().contains(&term) {
                score += TAG_WEIGHT;
                matched.tags = true;
            }
        }

        if score > 0 {
            hits.push(SearchHit {
                record,
                score,
                matched,
            });
        }
    }

    // Stable, so equal scores preserve corpus order.
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, d, 0, 0, 0).unwrap()
    }

    fn corpus() -> Vec<ArticleRecord> {
        vec![
            ArticleRecord::builder("a", "Rust Error Handling", day(1))
                .description("Result and the question-mark operator")
                .tags(["rust", "errors"])
                .build()
                .unwrap(),
            ArticleRecord::builder("b", "Async Patterns", day(2))
                .description("Futures in rust explained")
                .tags(["rust", "async"])
                .build()
                .unwrap(),
            ArticleRecord::builder("c", "Gardening Notes", day(3))
                .build()
                .unwrap(),
        ]
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let corpus = corpus();
        assert!(search("", &corpus).is_empty());
        assert!(search("   ", &corpus).is_empty());
    }

    #[test]
    fn test_title_match_scores_highest() {
        let corpus = corpus();
        let hits = search("error", &corpus);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.id, "a");
        // Title (100) plus the "errors" tag (30).
        assert_eq!(hits[0].score, 130);
        assert!(hits[0].matched.title);
        assert!(hits[0].matched.tags);
        assert!(!hits[0].matched.description);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let corpus = corpus();
        let hits = search("RUST", &corpus);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_each_matching_tag_adds_weight() {
        let record = ArticleRecord::builder("x", "Untitled", day(1))
            .tags(["rustfmt", "rustdoc", "cargo"])
            .build()
            .unwrap();
        let corpus = [record];
        let hits = search("rust", &corpus);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 2 * TAG_WEIGHT);
    }

    #[test]
    fn test_ordering_and_stable_ties() {
        let corpus = corpus();
        let hits = search("rust", &corpus);

        // "a": title 100 + tag 30 = 130.
        // "b": description 50 + tag 30 = 80.
        assert_eq!(hits[0].record.id, "a");
        assert_eq!(hits[0].score, 130);
        assert_eq!(hits[1].record.id, "b");
        assert_eq!(hits[1].score, 80);

        // Two records with identical scores keep corpus order.
        let tied = vec![
            ArticleRecord::builder("first", "alpha", day(1)).build().unwrap(),
            ArticleRecord::builder("second", "alpha", day(2)).build().unwrap(),
        ];
        let hits = search("alpha", &tied);
        assert_eq!(hits[0].record.id, "first");
        assert_eq!(hits[1].record.id, "second");
    }

    #[test]
    fn test_unmatched_records_are_excluded() {
        let corpus = corpus();
        let hits = search("bicycle", &corpus);
        assert!(hits.is_empty());

        assert!(search("anything", &[]).is_empty());
    }
}
