// src/models/mod.rs

//! Domain models for the curator tools.
//!
//! Ledger records live in `link`; the imported-page shape lives in `post`.

mod link;
mod post;

// Re-export all public types
pub use link::{parse_iso_date, DailyLink, LinkKind, QueuedLink, RawLink};
pub use post::PostPage;
