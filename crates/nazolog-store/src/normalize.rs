//! Normalization of raw stored documents into the entity shape.
//!
//! The document collection is schemaless: records written by earlier
//! versions of the blog may miss fields, and date fields may be stored
//! either as the collection's native representation (epoch milliseconds)
//! or as a raw RFC 3339 string. Every read path funnels each raw document
//! through [`normalize_document`], which substitutes defaults instead of
//! failing, so partial or legacy-shaped documents never break readers.

use chrono::{DateTime, TimeZone, Utc};
use nazolog_types::{EventFormat, EventId, MysteryEvent};
use serde_json::Value;

/// Convert one raw stored document into a [`MysteryEvent`].
///
/// Missing string fields become empty strings, a missing `published`
/// flag becomes `false`, and a missing or unknown `format` label becomes
/// [`EventFormat::Other`]. Unreadable dates fall back to the Unix epoch.
/// This function never fails.
pub fn normalize_document(id: &str, doc: &Value) -> MysteryEvent {
    MysteryEvent {
        id: EventId::from(id),
        participation_date: date_field(doc, "participationDate"),
        title: text_field(doc, "title"),
        organization: text_field(doc, "organization"),
        format: EventFormat::from_label(&text_field(doc, "format")),
        overview: text_field(doc, "overview"),
        impression: text_field(doc, "impression"),
        final_mystery: text_field(doc, "finalMystery"),
        created_at: date_field(doc, "createdAt"),
        updated_at: date_field(doc, "updatedAt"),
        published: doc
            .get("published")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        slug: text_field(doc, "slug"),
    }
}

/// Convert a [`DateTime`] to the collection's native representation.
pub fn to_document_timestamp(date: DateTime<Utc>) -> i64 {
    date.timestamp_millis()
}

/// Read a string field, defaulting to empty.
fn text_field(doc: &Value, key: &str) -> String {
    doc.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// Read a date field stored either as epoch milliseconds or as an
/// RFC 3339 string, defaulting to the Unix epoch.
fn date_field(doc: &Value, key: &str) -> DateTime<Utc> {
    match doc.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
            .unwrap_or(DateTime::UNIX_EPOCH),
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or(DateTime::UNIX_EPOCH),
        _ => DateTime::UNIX_EPOCH,
    }
}
