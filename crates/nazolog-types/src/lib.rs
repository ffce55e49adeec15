//! Shared type definitions for the nazolog mystery-event blog.
//!
//! This crate is the single source of truth for the event entity and its
//! create/update payload shapes. It defines data only; all persistence
//! behavior lives in `nazolog-store` and all HTTP behavior lives in
//! `nazolog-server`.
//!
//! # Modules
//!
//! - [`event`] -- The [`MysteryEvent`] entity and its payload variants
//! - [`format`] -- The [`EventFormat`] enumeration of event styles
//! - [`slug`] -- Random URL slug generation

pub mod event;
pub mod format;
pub mod slug;

// Re-export all public types at crate root for convenience.
pub use event::{CreateMysteryEvent, EventId, MysteryEvent, UpdateMysteryEvent};
pub use format::EventFormat;
pub use slug::generate_slug;
