//! Normalization of externally-sourced records into the canonical shape.
//!
//! Remote stores have shipped this data under several field-name dialects
//! (the original Portuguese API names, English equivalents, and assorted
//! abbreviations). Each canonical field probes an explicit ordered alias
//! table and takes the first present, non-null value; anything missing or
//! unusable is replaced by a documented default. Normalization is total:
//! any input, however malformed, yields a complete [`SeriesRecord`].

use crate::types::{Category, SeriesRecord};
use chrono::NaiveDate;
use serde_json::Value;

const ID_ALIASES: &[&str] = &["id"];
const TITLE_ALIASES: &[&str] = &["titulo", "title", "name"];
const SEASON_COUNT_ALIASES: &[&str] = &["numeroTemporadas", "seasons", "temporadas", "season_count"];
const RELEASE_DATE_ALIASES: &[&str] = &["dataLancamento", "releaseDate", "dataLanc", "release_date"];
const DIRECTOR_ALIASES: &[&str] = &["diretor", "director"];
const STUDIO_ALIASES: &[&str] = &["produtora", "producer", "production", "studio"];
const CATEGORY_ALIASES: &[&str] = &["categoria", "category", "genre"];
const WATCHED_DATE_ALIASES: &[&str] = &["dataAssistida", "watchedAt", "dataAssist", "watched_date"];
const NOTES_ALIASES: &[&str] = &["observacoes", "notes", "description"];

/// Placeholder for a missing title.
pub const TITLE_FALLBACK: &str = "Title not provided";
/// Placeholder for a missing director.
pub const DIRECTOR_FALLBACK: &str = "Director not provided";
/// Placeholder for a missing studio.
pub const STUDIO_FALLBACK: &str = "Studio not provided";

/// Map an arbitrary externally-sourced record onto the canonical shape.
///
/// Never fails and never panics. String fields default to a human-readable
/// placeholder, the season count to 0, dates to `None`, and the category to
/// [`Category::FALLBACK`].
pub fn normalize(raw: &Value) -> SeriesRecord {
    SeriesRecord {
        id: probe(raw, ID_ALIASES).and_then(coerce_id),
        title: string_or(raw, TITLE_ALIASES, TITLE_FALLBACK),
        season_count: probe(raw, SEASON_COUNT_ALIASES)
            .and_then(coerce_count)
            .unwrap_or(0),
        release_date: probe(raw, RELEASE_DATE_ALIASES).and_then(coerce_date),
        director: string_or(raw, DIRECTOR_ALIASES, DIRECTOR_FALLBACK),
        studio: string_or(raw, STUDIO_ALIASES, STUDIO_FALLBACK),
        category: probe(raw, CATEGORY_ALIASES)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(Category::FALLBACK.as_str())
            .to_string(),
        watched_date: probe(raw, WATCHED_DATE_ALIASES).and_then(coerce_date),
        notes: string_or(raw, NOTES_ALIASES, ""),
    }
}

/// Normalize every element of a collection response.
///
/// Non-array input (an error object, a bare string, null) yields an empty
/// vec rather than failing.
pub fn normalize_collection(raw: &Value) -> Vec<SeriesRecord> {
    match raw.as_array() {
        Some(items) => items.iter().map(normalize).collect(),
        None => Vec::new(),
    }
}

/// First present, non-null value among the aliases, in table order.
fn probe<'a>(raw: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    let obj = raw.as_object()?;
    aliases
        .iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| !value.is_null())
}

fn string_or(raw: &Value, aliases: &[&str], fallback: &str) -> String {
    probe(raw, aliases)
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

fn coerce_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        // Some stores assign numeric ids
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn coerce_count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            let count = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            Some(u32::try_from(count).unwrap_or(0))
        }
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

fn coerce_date(value: &Value) -> Option<NaiveDate> {
    let s = value.as_str()?;
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        // Tolerate full timestamps (2017-12-01T00:00:00Z) by truncation
        .or_else(|| {
            s.get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        })
}
