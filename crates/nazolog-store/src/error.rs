//! Error types for the data layer.
//!
//! All errors are propagated via [`StoreError`], which wraps the underlying
//! [`sqlx`] and [`serde_json`] errors. Only the read operations and `create`
//! surface it to callers; `update` and `delete` catch failures at the
//! adapter boundary and report `false` instead (see the
//! [`EventStore`](crate::store::EventStore) contract).

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
