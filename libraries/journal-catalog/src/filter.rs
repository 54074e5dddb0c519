//! Free-text and category filtering over the collection.

use journal_core::types::SeriesRecord;

/// Derive the subsequence of `records` matching the given criteria.
///
/// A non-empty query matches case-insensitively as a substring against the
/// title, director, or studio (any of the three). A category restricts to
/// exact matches. Both compose with AND. No constraints returns the
/// collection unchanged, order preserved.
///
/// Recomputes from scratch on every call; the dataset is small by design
/// and no index is kept.
pub fn filter(records: &[SeriesRecord], query: &str, category: Option<&str>) -> Vec<SeriesRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_query(record, &needle) && matches_category(record, category))
        .cloned()
        .collect()
}

fn matches_query(record: &SeriesRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.title.to_lowercase().contains(needle)
        || record.director.to_lowercase().contains(needle)
        || record.studio.to_lowercase().contains(needle)
}

fn matches_category(record: &SeriesRecord, category: Option<&str>) -> bool {
    category.map_or(true, |c| record.category == c)
}
