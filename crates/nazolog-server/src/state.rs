//! Shared application state for the HTTP API server.
//!
//! [`AppState`] carries the injected event store and the gate password.
//! Production wires in a [`HybridStore`](nazolog_store::HybridStore);
//! tests inject a zero-latency
//! [`MemoryStore`](nazolog_store::MemoryStore) directly, which keeps the
//! handlers independent of the probe.

use std::sync::Arc;

use nazolog_store::EventStore;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The event store serving all data-access operations.
    pub store: Arc<dyn EventStore>,
    /// The configured gate password (see [`AppState::verify_password`]).
    gate_password: String,
}

impl AppState {
    /// Create application state from a store and the gate password.
    pub fn new(store: Arc<dyn EventStore>, gate_password: String) -> Self {
        Self {
            store,
            gate_password,
        }
    }

    /// Compare a submitted password against the configured secret.
    ///
    /// This backs a cosmetic convenience gate, not a security boundary:
    /// the client persists a local flag plus a timestamp and treats the
    /// session as valid for 30 days with no server-side session state.
    pub fn verify_password(&self, candidate: &str) -> bool {
        candidate == self.gate_password
    }
}
