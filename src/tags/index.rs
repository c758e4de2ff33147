//! Ranked tag statistics derived from a corpus snapshot.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::article::ArticleRecord;

/// Aggregated usage statistics for one tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagStat {
    /// The tag label.
    pub name: String,
    /// Number of records carrying the tag. Always equals `members.len()`.
    pub count: usize,
    /// Ids of the records carrying the tag, newest first.
    pub members: Vec<String>,
}

/// Aggregate tag usage across the corpus into ranked statistics.
///
/// The result is sorted by `count` descending; tags with equal counts
/// keep the order in which they were first discovered during corpus
/// traversal. The entries cover exactly the distinct tags present in
/// the snapshot, so an untagged corpus yields an empty index.
pub fn build_tag_index(corpus: &[ArticleRecord]) -> Vec<TagStat> {
    let mut members: AHashMap<&str, Vec<usize>> = AHashMap::new();
    let mut discovery: Vec<&str> = Vec::new();

    for (idx, record) in corpus.iter().enumerate() {
        for tag in record.tag_slice() {
            members
                .entry(tag.as_str())
                .or_insert_with(|| {
                    discovery.push(tag.as_str());
                    Vec::new()
                })
                .push(idx);
        }
    }

    let mut stats: Vec<TagStat> = discovery
        .into_iter()
        .map(|name| {
            let mut indices = members.remove(name).unwrap_or_default();
            // Stable, so same-day records keep corpus order.
            indices.sort_by(|a, b| corpus[*b].published_at.cmp(&corpus[*a].published_at));

            TagStat {
                name: name.to_string(),
                count: indices.len(),
                members: indices.iter().map(|i| corpus[*i].id.clone()).collect(),
            }
        })
        .collect();

    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

/// The most-used tags, by record count.
pub fn popular_tags(corpus: &[ArticleRecord], limit: usize) -> Vec<TagStat> {
    let mut stats = build_tag_index(corpus);
    stats.truncate(limit);
    stats
}

/// All records carrying the given tag, newest first.
pub fn records_by_tag<'a>(tag: &str, corpus: &'a [ArticleRecord]) -> Vec<&'a ArticleRecord> {
    let mut records: Vec<&ArticleRecord> =
        corpus.iter().filter(|record| record.has_tag(tag)).collect();
    records.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    records
}

/// Tags related to `tag`, ranked by how many records they share with it.
///
/// Zero-overlap tags are excluded; ties are broken by global count
/// descending. An unknown tag has no members and therefore no related
/// tags.
pub fn related_tags(tag: &str, corpus: &[ArticleRecord], limit: usize) -> Vec<TagStat> {
    let target_members: AHashSet<&str> = records_by_tag(tag, corpus)
        .iter()
        .map(|record| record.id.as_str())
        .collect();

    // The index is already count-descending, so a stable sort on overlap
    // leaves equal-overlap tags ordered by global count.
    let mut ranked: Vec<(usize, TagStat)> = build_tag_index(corpus)
        .into_iter()
        .filter(|stat| stat.name != tag)
        .map(|stat| {
            let overlap = stat
                .members
                .iter()
                .filter(|id| target_members.contains(id.as_str()))
                .count();
            (overlap, stat)
        })
        .filter(|(overlap, _)| *overlap > 0)
        .collect();

    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.truncate(limit);
    ranked.into_iter().map(|(_, stat)| stat).collect()
}

/// Global tag frequency map: tag label to number of records carrying it.
pub fn tag_frequencies(corpus: &[ArticleRecord]) -> AHashMap<String, usize> {
    let mut frequencies = AHashMap::new();
    for record in corpus {
        for tag in record.tag_slice() {
            *frequencies.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    frequencies
}
