/// Series domain types
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A cataloged series in canonical shape.
///
/// This is the fixed field-name/type contract all internal logic operates
/// on, distinct from whatever shape the remote store returns. Records are
/// produced either by the normalizer (from remote data) or by a successful
/// create/update call echoing a validated draft back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRecord {
    /// Identifier assigned by the record service; `None` before first persist
    pub id: Option<String>,

    /// Series title
    pub title: String,

    /// Number of seasons (0 only as a normalization default)
    pub season_count: u32,

    /// Release date
    pub release_date: Option<NaiveDate>,

    /// Director name
    pub director: String,

    /// Producing studio
    pub studio: String,

    /// Category name; recognized values come from [`Category`](super::Category)
    pub category: String,

    /// Date the user watched the series
    pub watched_date: Option<NaiveDate>,

    /// Free-form notes, may be empty
    pub notes: String,
}

impl SeriesRecord {
    /// Whether this record has been persisted (received an id).
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// A user-entered candidate record, not yet confirmed persisted.
///
/// `season_count` is an `Option<i64>` so that both absent and non-positive
/// input survive until validation reports on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesDraft {
    /// Series title
    pub title: String,

    /// Number of seasons as entered
    pub season_count: Option<i64>,

    /// Release date
    pub release_date: Option<NaiveDate>,

    /// Director name
    pub director: String,

    /// Producing studio
    pub studio: String,

    /// Category name
    pub category: String,

    /// Date the user watched the series
    pub watched_date: Option<NaiveDate>,

    /// Free-form notes
    pub notes: String,
}

impl From<&SeriesRecord> for SeriesDraft {
    /// Start an edit from an existing record.
    fn from(record: &SeriesRecord) -> Self {
        Self {
            title: record.title.clone(),
            season_count: Some(i64::from(record.season_count)),
            release_date: record.release_date,
            director: record.director.clone(),
            studio: record.studio.clone(),
            category: record.category.clone(),
            watched_date: record.watched_date,
            notes: record.notes.clone(),
        }
    }
}
