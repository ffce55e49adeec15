//! The mystery-event entity and its create/update payload shapes.
//!
//! [`MysteryEvent`] is the sole entity of the blog. [`CreateMysteryEvent`]
//! and [`UpdateMysteryEvent`] are the narrower shapes accepted by the store
//! operations: creation requires everything except the free-text extras,
//! while updates are fully partial -- absent fields leave the stored value
//! unchanged.
//!
//! The JSON contract (both the HTTP API and the stored documents) uses
//! camelCase field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::EventFormat;

/// Opaque identifier for a stored event.
///
/// Assigned by whichever store performed the insert and immutable
/// afterwards. The remote store uses generated UUIDs rendered as text;
/// the in-memory store uses a `event_{millis}_{suffix}` scheme. Callers
/// must treat the value as opaque either way.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Wrap a store-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner [`String`].
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for EventId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A recorded mystery-solving event.
///
/// Lifecycle: created by an explicit `create` call (which assigns `id`,
/// `slug`, `created_at`, and `updated_at`), mutated only through `update`
/// (which advances `updated_at` and never touches `id` or `created_at`),
/// and removed only through `delete` (hard delete, no tombstone).
///
/// Invariant: `created_at <= updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MysteryEvent {
    /// Store-assigned identifier, unique within one store.
    pub id: EventId,
    /// The day the author participated in the event.
    pub participation_date: DateTime<Utc>,
    /// Event title.
    pub title: String,
    /// Organizing company or group.
    pub organization: String,
    /// Event style.
    pub format: EventFormat,
    /// Short description of the event.
    pub overview: String,
    /// What left an impression (free text, may be empty).
    pub impression: String,
    /// Notes on the final puzzle (free text, may be empty).
    pub final_mystery: String,
    /// When the record was first created. Never mutated.
    pub created_at: DateTime<Utc>,
    /// When the record was last written. Advanced by every update.
    pub updated_at: DateTime<Utc>,
    /// Whether the event appears in the public listing.
    pub published: bool,
    /// URL-safe identifier, assigned once at creation and preserved
    /// across updates. Uniqueness is probabilistic, not enforced.
    pub slug: String,
}

/// Payload for creating a new event.
///
/// Everything the entity carries except the store-assigned fields
/// (`id`, `created_at`, `updated_at`). The slug is pre-generated by the
/// caller (see [`crate::slug::generate_slug`]); the free-text extras
/// default to empty. The store does not validate required fields --
/// that check belongs to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMysteryEvent {
    /// The day the author participated in the event.
    pub participation_date: DateTime<Utc>,
    /// Event title.
    pub title: String,
    /// Organizing company or group.
    pub organization: String,
    /// Event style.
    pub format: EventFormat,
    /// Short description of the event.
    pub overview: String,
    /// What left an impression. Defaults to empty.
    #[serde(default)]
    pub impression: String,
    /// Notes on the final puzzle. Defaults to empty.
    #[serde(default)]
    pub final_mystery: String,
    /// Whether the event is publicly visible from the start.
    pub published: bool,
    /// Pre-generated URL slug.
    pub slug: String,
}

/// Partial payload for updating an existing event.
///
/// Every field is optional; `None` leaves the stored value unchanged.
/// Serialization skips absent fields so the remote store can merge the
/// payload directly into the stored document. The slug can only ever be
/// replaced, never blanked, because an absent `slug` is simply not part
/// of the merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMysteryEvent {
    /// Replacement participation date, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participation_date: Option<DateTime<Utc>>,
    /// Replacement title, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement organization, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Replacement format, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<EventFormat>,
    /// Replacement overview, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Replacement impression text, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impression: Option<String>,
    /// Replacement final-mystery text, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_mystery: Option<String>,
    /// Replacement published flag, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    /// Replacement slug, if any. Leave `None` to preserve the current one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}
