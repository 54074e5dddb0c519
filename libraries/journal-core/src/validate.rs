//! Field-level validation of user-entered drafts.
//!
//! Every rule is checked independently and every violation is reported, so
//! an entry form can mark all offending fields in one pass. Validation is
//! pure: no clock, no I/O, deterministic for a given draft. The forward-date
//! check on release/watched dates belongs to the entry widget, not here.

use crate::types::{Category, SeriesDraft};
use std::collections::BTreeMap;
use std::fmt;

/// Lowest accepted season count.
pub const MIN_SEASON_COUNT: i64 = 1;
/// Highest accepted season count.
pub const MAX_SEASON_COUNT: i64 = 50;

/// Outcome of validating a draft: a field → message map, empty when valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationReport {
    /// True iff no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All violations, keyed by canonical field name.
    pub fn errors(&self) -> &BTreeMap<&'static str, String> {
        &self.errors
    }

    /// The message for one field, if it failed.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    fn fail(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("no violations");
        }
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Check a draft against the field-level business rules.
///
/// `notes` is exempt and always valid.
pub fn validate(draft: &SeriesDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    if draft.title.trim().is_empty() {
        report.fail("title", "Title is required");
    }

    match draft.season_count {
        None => report.fail("season_count", "Season count is required"),
        Some(n) if !(MIN_SEASON_COUNT..=MAX_SEASON_COUNT).contains(&n) => report.fail(
            "season_count",
            format!("Season count must be between {MIN_SEASON_COUNT} and {MAX_SEASON_COUNT}"),
        ),
        Some(_) => {}
    }

    if draft.release_date.is_none() {
        report.fail("release_date", "Release date is required");
    }

    if draft.director.trim().is_empty() {
        report.fail("director", "Director is required");
    }

    if draft.studio.trim().is_empty() {
        report.fail("studio", "Studio is required");
    }

    if draft.category.trim().is_empty() {
        report.fail("category", "Category is required");
    } else if !Category::is_recognized(draft.category.trim()) {
        report.fail(
            "category",
            format!("Unrecognized category: {}", draft.category.trim()),
        );
    }

    if draft.watched_date.is_none() {
        report.fail("watched_date", "Watched date is required");
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_draft() -> SeriesDraft {
        SeriesDraft {
            title: "Dark".to_string(),
            season_count: Some(3),
            release_date: NaiveDate::from_ymd_opt(2017, 12, 1),
            director: "Baran bo Odar".to_string(),
            studio: "Netflix".to_string(),
            category: "Mystery".to_string(),
            watched_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            notes: String::new(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        let report = validate(&valid_draft());
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn blank_title_fails() {
        let mut draft = valid_draft();
        draft.title = "   ".to_string();
        let report = validate(&draft);
        assert!(!report.is_valid());
        assert!(report.error_for("title").is_some());
    }

    #[test]
    fn season_count_out_of_range_fails() {
        for count in [None, Some(0), Some(-3), Some(51)] {
            let mut draft = valid_draft();
            draft.season_count = count;
            let report = validate(&draft);
            assert!(!report.is_valid(), "count {count:?} should fail");
            assert!(report.error_for("season_count").is_some());
        }

        for count in [Some(1), Some(50)] {
            let mut draft = valid_draft();
            draft.season_count = count;
            assert!(validate(&draft).is_valid(), "count {count:?} should pass");
        }
    }

    #[test]
    fn missing_dates_fail_independently() {
        let mut draft = valid_draft();
        draft.release_date = None;
        draft.watched_date = None;
        let report = validate(&draft);
        assert!(report.error_for("release_date").is_some());
        assert!(report.error_for("watched_date").is_some());
    }

    #[test]
    fn every_recognized_category_passes() {
        for category in Category::ALL {
            let mut draft = valid_draft();
            draft.category = category.as_str().to_string();
            let report = validate(&draft);
            assert!(report.error_for("category").is_none(), "{category} rejected");
        }
    }

    #[test]
    fn blank_and_unrecognized_categories_fail() {
        let mut draft = valid_draft();
        draft.category = String::new();
        assert_eq!(
            validate(&draft).error_for("category"),
            Some("Category is required")
        );

        draft.category = "Telenovela".to_string();
        let report = validate(&draft);
        assert_eq!(
            report.error_for("category"),
            Some("Unrecognized category: Telenovela")
        );
    }

    #[test]
    fn notes_are_exempt() {
        let mut draft = valid_draft();
        draft.notes = String::new();
        assert!(validate(&draft).is_valid());
        draft.notes = "long rambling notes".to_string();
        assert!(validate(&draft).is_valid());
    }

    #[test]
    fn all_violations_are_reported_together() {
        let draft = SeriesDraft::default();
        let report = validate(&draft);
        assert!(!report.is_valid());
        // Every required field except notes
        assert_eq!(report.errors().len(), 7);
        let rendered = report.to_string();
        assert!(rendered.contains("title"));
        assert!(rendered.contains("watched_date"));
    }
}
