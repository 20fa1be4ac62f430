// src/guard.rs

//! Duplicate detection across the ledgers and the imported pages.
//!
//! Every guard runs before any file is mutated. A positive match aborts a
//! ledger operation outright; the feed importer instead skips the entry
//! and moves on.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::{DailyLink, QueuedLink};

/// True iff `date` is already used by a daily entry.
pub fn daily_date_taken(daily: &[DailyLink], date: NaiveDate) -> bool {
    daily.iter().any(|link| link.date == date)
}

/// True iff `date` is pinned by an existing queue entry.
pub fn queue_date_taken(queue: &[QueuedLink], date: NaiveDate) -> bool {
    queue.iter().any(|link| link.date == Some(date))
}

/// True iff `date` collides with either ledger. Undated queue entries
/// never collide.
pub fn date_taken_anywhere(daily: &[DailyLink], queue: &[QueuedLink], date: NaiveDate) -> bool {
    daily_date_taken(daily, date) || queue_date_taken(queue, date)
}

/// True iff `url` (compared after trimming) is already queued.
pub fn queue_url_taken(queue: &[QueuedLink], url: &str) -> bool {
    let url = url.trim();
    queue.iter().any(|link| link.url.trim() == url)
}

/// External identities of every page imported so far: canonical URLs and
/// feed guids, collected from existing pages and extended as a run writes
/// new ones.
#[derive(Debug, Default)]
pub struct ExistingPostKeys {
    urls: HashSet<String>,
    guids: HashSet<String>,
}

impl ExistingPostKeys {
    /// True iff the candidate identity matches a known URL or guid.
    pub fn contains(&self, url: &str, guid: &str) -> bool {
        self.urls.contains(url) || (!guid.is_empty() && self.guids.contains(guid))
    }

    /// Record an identity; blank components are ignored.
    pub fn insert(&mut self, url: &str, guid: &str) {
        self.insert_url(url);
        self.insert_guid(guid);
    }

    pub fn insert_url(&mut self, url: &str) {
        if !url.is_empty() {
            self.urls.insert(url.to_string());
        }
    }

    pub fn insert_guid(&mut self, guid: &str) {
        if !guid.is_empty() {
            self.guids.insert(guid.to_string());
        }
    }

    /// Number of distinct page URLs known.
    pub fn url_count(&self) -> usize {
        self.urls.len()
    }
}
