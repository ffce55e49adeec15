//! HTTP presentation layer for the nazolog mystery-event blog.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Public REST endpoints** for the published listing and slug-based
//!   detail pages
//! - **Admin REST endpoints** for the full listing and create / update /
//!   delete operations
//! - **A password-gate endpoint** (`POST /api/auth`) -- a cosmetic
//!   convenience gate, not a security boundary
//! - **A minimal HTML status page** (`GET /`)
//!
//! # Architecture
//!
//! Handlers hold no business logic; everything delegates to the injected
//! [`EventStore`](nazolog_store::EventStore) in [`AppState`]. Production
//! injects a [`HybridStore`](nazolog_store::HybridStore), which probes
//! the remote collection once and falls back to the seeded in-memory
//! store when it is unreachable.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use config::AppConfig;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
