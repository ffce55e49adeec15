//! Data layer for the nazolog mystery-event blog.
//!
//! Events live in a remote `PostgreSQL` document collection when it is
//! reachable, and in a seeded in-memory list when it is not. The choice
//! is made once per process by a liveness probe and never revisited.
//!
//! # Architecture
//!
//! ```text
//! Presentation layer (nazolog-server)
//!     |
//!     +-- EventStore trait (six operations)
//!             |
//!             +-- HybridStore -- one-shot probe, memoized verdict
//!                     |-- RemoteStore (PostgreSQL JSONB documents)
//!                     +-- MemoryStore (seeded process-local list)
//! ```
//!
//! Every raw document read from the remote collection passes through the
//! [`normalize`] routine so partial or legacy-shaped records still come
//! back as complete [`MysteryEvent`](nazolog_types::MysteryEvent) values.
//!
//! # Modules
//!
//! - [`store`] -- The [`EventStore`] capability trait
//! - [`remote`] -- `PostgreSQL` document-collection adapter
//! - [`memory`] -- Seeded in-memory adapter with artificial latency
//! - [`hybrid`] -- One-shot probe and routing
//! - [`normalize`] -- Raw-document normalization
//! - [`error`] -- Shared error type

pub mod error;
pub mod hybrid;
pub mod memory;
pub mod normalize;
pub mod remote;
pub mod store;

// Re-export primary types for convenience.
pub use error::StoreError;
pub use hybrid::{BackendKind, HybridStore};
pub use memory::MemoryStore;
pub use normalize::normalize_document;
pub use remote::{RemoteConfig, RemoteStore};
pub use store::EventStore;
