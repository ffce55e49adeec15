//! The six-operation capability contract every event store implements.
//!
//! [`EventStore`] is the single boundary the presentation layer consumes.
//! It is implemented three times: by [`RemoteStore`](crate::RemoteStore)
//! against the `PostgreSQL` document collection, by
//! [`MemoryStore`](crate::MemoryStore) against a seeded process-local
//! list, and by [`HybridStore`](crate::HybridStore) which probes the
//! remote once and delegates to whichever adapter answered.

use async_trait::async_trait;
use nazolog_types::{CreateMysteryEvent, EventId, MysteryEvent, UpdateMysteryEvent};

use crate::error::StoreError;

/// Asynchronous CRUD contract over the mystery-event collection.
///
/// # Error signaling
///
/// The contract is deliberately asymmetric, preserved from the reference
/// behavior: the read operations and [`create`](Self::create) propagate
/// transport failures as [`StoreError`], while [`update`](Self::update)
/// and [`delete`](Self::delete) swallow failures and report `false`.
/// Absence is never an error -- the lookups return `None` and the
/// mutations return `false` when the id does not exist.
///
/// No operation retries, validates required fields, or enforces slug
/// uniqueness; those concerns belong to the presentation layer or are
/// accepted as probabilistic.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Return every published event, sorted by participation date
    /// descending.
    async fn list_published(&self) -> Result<Vec<MysteryEvent>, StoreError>;

    /// Return every event including unpublished drafts, sorted by
    /// participation date descending. Intended for the admin view only.
    async fn list_all(&self) -> Result<Vec<MysteryEvent>, StoreError>;

    /// Look up one event by id. `None` when no record exists.
    async fn get_by_id(&self, id: &EventId) -> Result<Option<MysteryEvent>, StoreError>;

    /// Look up one event by exact slug match.
    ///
    /// Duplicate slugs are not validated; the first record the store
    /// returns wins and behavior beyond that is unspecified.
    async fn get_by_slug(&self, slug: &str) -> Result<Option<MysteryEvent>, StoreError>;

    /// Insert a new event, stamping `created_at == updated_at` to now,
    /// and return the store-assigned id. Failures propagate; no retry.
    async fn create(&self, data: &CreateMysteryEvent) -> Result<EventId, StoreError>;

    /// Merge the supplied fields into the stored event and advance
    /// `updated_at`. Returns `false` when the id is unknown or the
    /// write fails; never errors.
    async fn update(&self, id: &EventId, data: &UpdateMysteryEvent) -> bool;

    /// Remove the event by id (hard delete). Returns `false` when the
    /// id is unknown or the write fails; never errors.
    async fn delete(&self, id: &EventId) -> bool;
}
