//! Persistence for the curated site state.
//!
//! ## Directory Structure
//!
//! ```text
//! site/
//! ├── _config.yml               # Site-wide configuration (read only)
//! ├── _data/
//! │   ├── daily_links.yml       # Daily ledger, newest first
//! │   └── daily_links_queue.yml # Queue ledger, oldest first
//! └── _posts/
//!     └── 2024-01-15-my-post.md # Imported pages, written once
//! ```
//!
//! Ledgers are small, human-reviewed lists. Every mutation rewrites the
//! whole file so the stored form stays canonical; pages are written once
//! and never updated afterwards.

pub mod ledger;
pub mod posts;
