//! Summary statistics derived from the collection.

use journal_core::types::SeriesRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Size of the recently-watched shortlist.
pub const RECENTLY_WATCHED_LIMIT: usize = 3;

/// Aggregate view of the collection, recomputed on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogStats {
    /// Number of records in the collection
    pub total: usize,
    /// Sum of season counts; records without one contribute 0
    pub total_seasons: u64,
    /// Per-category record counts; records with an empty category are
    /// excluded, not bucketed into a fallback
    pub category_counts: BTreeMap<String, usize>,
    /// Up to three records with a watched date, most recent first
    pub recently_watched: Vec<SeriesRecord>,
}

/// Compute summary statistics over the collection.
///
/// `recently_watched` is stable-sorted descending by watched date, so ties
/// keep their original collection order; records without a watched date are
/// excluded entirely.
pub fn aggregate(records: &[SeriesRecord]) -> CatalogStats {
    let total = records.len();
    let total_seasons = records.iter().map(|r| u64::from(r.season_count)).sum();

    let mut category_counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        if !record.category.is_empty() {
            *category_counts.entry(record.category.clone()).or_insert(0) += 1;
        }
    }

    let mut recently_watched: Vec<SeriesRecord> = records
        .iter()
        .filter(|r| r.watched_date.is_some())
        .cloned()
        .collect();
    recently_watched.sort_by(|a, b| b.watched_date.cmp(&a.watched_date));
    recently_watched.truncate(RECENTLY_WATCHED_LIMIT);

    CatalogStats {
        total,
        total_seasons,
        category_counts,
        recently_watched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(title: &str, seasons: u32, category: &str, watched: Option<&str>) -> SeriesRecord {
        SeriesRecord {
            id: Some(title.to_lowercase()),
            title: title.to_string(),
            season_count: seasons,
            release_date: None,
            director: "someone".to_string(),
            studio: "somewhere".to_string(),
            category: category.to_string(),
            watched_date: watched
                .map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").expect("test date")),
            notes: String::new(),
        }
    }

    #[test]
    fn totals_match_the_collection() {
        let records = vec![
            record("Dark", 3, "Mystery", Some("2024-05-01")),
            record("Mindhunter", 2, "Crime", Some("2023-11-20")),
            record("Unfinished", 0, "Drama", None),
        ];
        let stats = aggregate(&records);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.total_seasons, 5);
    }

    #[test]
    fn empty_collection_aggregates_to_zeroes() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.total_seasons, 0);
        assert!(stats.category_counts.is_empty());
        assert!(stats.recently_watched.is_empty());
    }

    #[test]
    fn categories_are_counted_and_empty_ones_excluded() {
        let records = vec![
            record("Dark", 3, "Mystery", None),
            record("Sherlock", 4, "Mystery", None),
            record("Chernobyl", 1, "Drama", None),
            record("Unlabeled", 1, "", None),
        ];
        let stats = aggregate(&records);
        assert_eq!(stats.category_counts.get("Mystery"), Some(&2));
        assert_eq!(stats.category_counts.get("Drama"), Some(&1));
        assert_eq!(stats.category_counts.len(), 2);
    }

    #[test]
    fn recently_watched_is_capped_and_descending() {
        let records = vec![
            record("A", 1, "Drama", Some("2024-01-01")),
            record("B", 1, "Drama", Some("2024-04-01")),
            record("C", 1, "Drama", None),
            record("D", 1, "Drama", Some("2024-03-01")),
            record("E", 1, "Drama", Some("2024-02-01")),
        ];
        let stats = aggregate(&records);
        let titles: Vec<&str> = stats
            .recently_watched
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, ["B", "D", "E"]);
    }

    #[test]
    fn ties_keep_collection_order() {
        let records = vec![
            record("First", 1, "Drama", Some("2024-05-01")),
            record("Second", 1, "Drama", Some("2024-05-01")),
            record("Third", 1, "Drama", Some("2024-05-01")),
        ];
        let stats = aggregate(&records);
        let titles: Vec<&str> = stats
            .recently_watched
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn unwatched_records_are_excluded_entirely() {
        let records = vec![
            record("Watched", 1, "Drama", Some("2024-05-01")),
            record("Backlog", 1, "Drama", None),
        ];
        let stats = aggregate(&records);
        assert_eq!(stats.recently_watched.len(), 1);
        assert_eq!(stats.recently_watched[0].title, "Watched");
    }
}
