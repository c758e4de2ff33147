//! Autocomplete suggestions drawn from titles and tags.

use ahash::AHashSet;

use crate::article::ArticleRecord;

/// Configuration for suggestion generation.
#[derive(Debug, Clone, Copy)]
pub struct SuggestConfig {
    /// Queries shorter than this yield no suggestions.
    pub min_query_len: usize,
    /// Maximum number of suggestions to return.
    pub limit: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            min_query_len: 2,
            limit: 5,
        }
    }
}

/// Suggest completions for a partial query, with the default config.
pub fn suggest(query: &str, corpus: &[ArticleRecord]) -> Vec<String> {
    suggest_with_config(query, corpus, SuggestConfig::default())
}

/// Suggest completions for a partial query.
///
/// Candidates are the lowercased whitespace-split tokens of every title
/// and every full tag string (tags keep their original casing). A
/// candidate qualifies when it contains the lowercased query but is not
/// the query itself. Results are deduplicated by exact equality and
/// returned in first-discovery order: per record title tokens first,
/// then tags, with corpus order preserved.
pub fn suggest_with_config(
    query: &str,
    corpus: &[ArticleRecord],
    config: SuggestConfig,
) -> Vec<String> {
    if query.trim().is_empty() || query.chars().count() < config.min_query_len {
        return Vec::new();
    }

    let term = query.to_lowercase();
    let mut seen: AHashSet<String> = AHashSet::new();
    let mut suggestions: Vec<String> = Vec::new();

    for record in corpus {
        for word in record.title.to_lowercase().split_whitespace() {
            if word.contains(&term) && word != term && seen.insert(word.to_string()) {
                suggestions.push(word.to_string());
            }
        }

        for tag in record.tag_slice() {
            let tag_lower = tag.to_lowercase();
            if tag_lower.contains(&term) && tag_lower != term && seen.insert(tag.clone()) {
                suggestions.push(tag.clone());
            }
        }
    }

    suggestions.truncate(config.limit);
    suggestions
}
