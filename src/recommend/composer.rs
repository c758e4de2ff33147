//! Composes similarity, recency, and tag popularity into one bundle.

use serde::Serialize;

use crate::article::ArticleRecord;
use crate::similarity::{RecommendationEntry, RelatedConfig, related_records_with_config};
use crate::tags::tag_frequencies;

/// Per-list limits for [`recommendations`].
#[derive(Debug, Clone, Copy)]
pub struct RecommendOptions {
    /// Maximum similarity-ranked entries.
    pub related_limit: usize,
    /// Maximum recency-ranked records.
    pub latest_limit: usize,
    /// Maximum tag-popularity-ranked records.
    pub popular_limit: usize,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        RecommendOptions {
            related_limit: 3,
            latest_limit: 2,
            popular_limit: 2,
        }
    }
}

/// The three recommendation lists for one target article.
///
/// The lists are independent; a record may legitimately appear in more
/// than one of them.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations<'a> {
    /// Similarity-ranked records with justification reasons.
    pub related: Vec<RecommendationEntry<'a>>,
    /// Most recently published records.
    pub latest: Vec<&'a ArticleRecord>,
    /// Records whose tags are most used across the corpus.
    pub popular: Vec<&'a ArticleRecord>,
}

/// Build the related/latest/popular bundle for one target article.
pub fn recommendations<'a>(
    target: &ArticleRecord,
    corpus: &'a [ArticleRecord],
    options: RecommendOptions,
) -> Recommendations<'a> {
    let related_config = RelatedConfig {
        limit: options.related_limit,
        ..RelatedConfig::default()
    };

    Recommendations {
        related: related_records_with_config(target, corpus, related_config),
        latest: latest_records(target, corpus, options.latest_limit),
        popular: popular_records(target, corpus, options.popular_limit),
    }
}

/// The most recently published records, excluding the target.
pub fn latest_records<'a>(
    target: &ArticleRecord,
    corpus: &'a [ArticleRecord],
    limit: usize,
) -> Vec<&'a ArticleRecord> {
    let mut records: Vec<&ArticleRecord> = corpus
        .iter()
        .filter(|record| record.id != target.id)
        .collect();
    records.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    records.truncate(limit);
    records
}

/// Records ranked by the summed corpus-wide frequency of their own tags,
/// excluding the target.
///
/// A record's popularity is the sum, over its tags, of how many records
/// in the whole corpus carry that tag. Untagged records score 0 and sort
/// last; ties keep corpus order.
pub fn popular_records<'a>(
    target: &ArticleRecord,
    corpus: &'a [ArticleRecord],
    limit: usize,
) -> Vec<&'a ArticleRecord> {
    let frequencies = tag_frequencies(corpus);

    let mut ranked: Vec<(usize, &ArticleRecord)> = corpus
        .iter()
        .filter(|record| record.id != target.id)
        .map(|record| {
            let popularity = record
                .tag_slice()
                .iter()
                .map(|tag| frequencies.get(tag).copied().unwrap_or(0))
                .sum();
            (popularity, record)
        })
        .collect();

    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.truncate(limit);
    ranked.into_iter().map(|(_, record)| record).collect()
}
