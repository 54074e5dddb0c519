//! Request payload types for the remote record service.
//!
//! The remote store speaks the original API's field names, which differ from
//! the canonical shape. Create and update requests go out in this form; the
//! normalizer handles whatever comes back.

use crate::types::SeriesDraft;
use serde::Serialize;

/// Date format used on the wire for both date fields.
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Serialized form of a draft sent to the record service on create/update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordPayload {
    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "numeroTemporadas")]
    pub season_count: i64,

    #[serde(rename = "dataLancamento")]
    pub release_date: Option<String>,

    #[serde(rename = "diretor")]
    pub director: String,

    #[serde(rename = "produtora")]
    pub studio: String,

    #[serde(rename = "categoria")]
    pub category: String,

    #[serde(rename = "dataAssistida")]
    pub watched_date: Option<String>,

    #[serde(rename = "observacoes")]
    pub notes: String,
}

impl RecordPayload {
    /// Build the wire payload for a draft.
    ///
    /// Dates are rendered as `YYYY-MM-DD` and the season count is coerced to
    /// an integer. Callers are expected to validate the draft first; a
    /// missing season count serializes as 0 rather than panicking.
    pub fn from_draft(draft: &SeriesDraft) -> Self {
        Self {
            title: draft.title.clone(),
            season_count: draft.season_count.unwrap_or(0),
            release_date: draft
                .release_date
                .map(|d| d.format(WIRE_DATE_FORMAT).to_string()),
            director: draft.director.clone(),
            studio: draft.studio.clone(),
            category: draft.category.clone(),
            watched_date: draft
                .watched_date
                .map(|d| d.format(WIRE_DATE_FORMAT).to_string()),
            notes: draft.notes.clone(),
        }
    }
}
