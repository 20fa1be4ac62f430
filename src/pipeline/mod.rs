//! Pipeline entry points for the curator operations.
//!
//! - `run_add`: validate a link and prepend it to the daily ledger
//! - `run_queue`: validate a link and append it to the queue ledger
//! - `run_publish`: move the queue head into the daily ledger
//! - `run_sync`: import new Medium posts as site pages

pub mod add;
pub mod publish;
pub mod queue;
pub mod sync;

pub use add::run_add;
pub use publish::{publish_head, run_publish, Publication, PublishedEntry};
pub use queue::run_queue;
pub use sync::{run_sync, SyncOptions, SyncReport, DEFAULT_MAX_POSTS};
