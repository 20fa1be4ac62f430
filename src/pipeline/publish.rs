// src/pipeline/publish.rs

//! Queue-to-daily publish transition.
//!
//! The decision logic is a pure function over two in-memory ledgers;
//! `run_publish` wraps it with file IO. Keeping the transition pure makes
//! the ordering and conflict rules testable without touching disk.

use chrono::{Local, NaiveDate};

use crate::config::SitePaths;
use crate::error::{AppError, Result};
use crate::guard;
use crate::models::{DailyLink, QueuedLink};
use crate::storage::ledger;

/// A successfully published entry, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedEntry {
    pub date: NaiveDate,
    pub title: String,
}

/// Outcome of the pure publish transition.
#[derive(Debug)]
pub enum Publication {
    /// The queue was empty; nothing to do and nothing to write.
    Nothing,
    /// The queue head became the newest daily entry. Both updated ledgers
    /// are returned for the caller to persist.
    Published {
        daily: Vec<DailyLink>,
        queue: Vec<QueuedLink>,
        entry: PublishedEntry,
    },
}

/// Compute the publish transition over in-memory ledgers.
///
/// The queue head is removed, re-checked for integrity, dated (pinned
/// date, else `today`), and prepended to the daily ledger. An empty queue
/// is a normal no-op. A malformed head or a date collision with either
/// remaining ledger is an error; on error the inputs are discarded
/// unwritten, so the caller cannot persist a half-applied transition.
pub fn publish_head(
    mut daily: Vec<DailyLink>,
    mut queue: Vec<QueuedLink>,
    today: NaiveDate,
) -> Result<Publication> {
    if queue.is_empty() {
        return Ok(Publication::Nothing);
    }

    let head = queue.remove(0);
    head.integrity_check()?;
    let date = head.date.unwrap_or(today);

    if guard::daily_date_taken(&daily, date) {
        return Err(AppError::conflict(format!(
            "A daily entry for {date} already exists. Queue was not changed."
        )));
    }
    if guard::queue_date_taken(&queue, date) {
        return Err(AppError::conflict(format!(
            "Another queued entry is already pinned to {date}. Queue was not changed."
        )));
    }

    let entry = PublishedEntry {
        date,
        title: head.title.clone(),
    };
    daily.insert(0, head.publish(date));
    Ok(Publication::Published { daily, queue, entry })
}

/// Load both ledgers, attempt the transition, persist on success.
///
/// The daily file is written before the queue file. An interruption
/// between the two writes leaves the entry in both ledgers, which the
/// next run reports as a date conflict with the queue intact; the reverse
/// order could drop the entry entirely.
pub fn run_publish(paths: &SitePaths) -> Result<Option<PublishedEntry>> {
    let daily_path = paths.daily_file();
    let queue_path = paths.queue_file();
    let daily: Vec<DailyLink> = ledger::load(&daily_path)?;
    let queue: Vec<QueuedLink> = ledger::load(&queue_path)?;

    match publish_head(daily, queue, Local::now().date_naive())? {
        Publication::Nothing => {
            log::info!("Queue is empty. Nothing to publish.");
            Ok(None)
        }
        Publication::Published { daily, queue, entry } => {
            ledger::save(&daily_path, &daily)?;
            ledger::save(&queue_path, &queue)?;
            log::info!("Published '{}' for {}.", entry.title, entry.date);
            Ok(Some(entry))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LinkKind, RawLink};
    use std::fs;

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
    }

    fn queued(url: &str, pinned: Option<&str>) -> QueuedLink {
        RawLink {
            title: format!("Title for {url}"),
            url: url.to_string(),
            description: "Desc".to_string(),
            kind: "article".to_string(),
            date: pinned.map(str::to_string),
        }
        .validate()
        .unwrap()
    }

    fn daily(day: &str) -> DailyLink {
        queued(&format!("https://example.com/{day}"), Some(day)).publish(date(day))
    }

    #[test]
    fn test_publish_head_empty_queue() {
        let result = publish_head(vec![daily("2024-01-14")], Vec::new(), date("2024-01-15"));
        assert!(matches!(result, Ok(Publication::Nothing)));
    }

    #[test]
    fn test_publish_head_moves_oldest_entry() {
        let queue = vec![
            queued("https://example.com/first", None),
            queued("https://example.com/second", None),
        ];
        let today = date("2024-01-15");

        match publish_head(Vec::new(), queue, today).unwrap() {
            Publication::Published { daily, queue, entry } => {
                assert_eq!(daily.len(), 1);
                assert_eq!(daily[0].url, "https://example.com/first");
                assert_eq!(daily[0].date, today);
                assert_eq!(queue.len(), 1);
                assert_eq!(queue[0].url, "https://example.com/second");
                assert_eq!(entry.date, today);
                assert_eq!(entry.title, "Title for https://example.com/first");
            }
            Publication::Nothing => panic!("expected a publication"),
        }
    }

    #[test]
    fn test_publish_head_prefers_pinned_date() {
        let queue = vec![queued("https://example.com/a", Some("2024-03-01"))];

        match publish_head(Vec::new(), queue, date("2024-01-15")).unwrap() {
            Publication::Published { daily, .. } => {
                assert_eq!(daily[0].date, date("2024-03-01"));
            }
            Publication::Nothing => panic!("expected a publication"),
        }
    }

    #[test]
    fn test_publish_head_prepends_to_existing_daily() {
        let existing = vec![daily("2024-01-14"), daily("2024-01-13")];
        let queue = vec![queued("https://example.com/new", None)];

        match publish_head(existing, queue, date("2024-01-15")).unwrap() {
            Publication::Published { daily, .. } => {
                assert_eq!(daily.len(), 3);
                assert_eq!(daily[0].url, "https://example.com/new");
                assert_eq!(daily[1].date, date("2024-01-14"));
            }
            Publication::Nothing => panic!("expected a publication"),
        }
    }

    #[test]
    fn test_publish_head_date_conflict_with_daily() {
        let existing = vec![daily("2024-01-15")];
        let queue = vec![queued("https://example.com/new", None)];

        let result = publish_head(existing, queue, date("2024-01-15"));
        match result {
            Err(AppError::Conflict(message)) => {
                assert_eq!(
                    message,
                    "A daily entry for 2024-01-15 already exists. Queue was not changed."
                );
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_publish_head_date_conflict_with_remaining_queue() {
        let queue = vec![
            queued("https://example.com/a", None),
            queued("https://example.com/b", Some("2024-01-15")),
        ];

        let result = publish_head(Vec::new(), queue, date("2024-01-15"));
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[test]
    fn test_publish_head_malformed_entry() {
        let mut head = queued("https://example.com/a", None);
        head.description = "   ".to_string();

        let result = publish_head(Vec::new(), vec![head], date("2024-01-15"));
        match result {
            Err(AppError::DataIntegrity(message)) => {
                assert_eq!(message, "Queue entry description is required.");
            }
            other => panic!("expected integrity error, got {other:?}"),
        }
    }

    #[test]
    fn test_run_publish_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = SitePaths::new(dir.path());
        ledger::save(&paths.daily_file(), &[daily("2024-01-10")]).unwrap();
        ledger::save(
            &paths.queue_file(),
            &[
                queued("https://example.com/head", Some("2024-01-15")),
                queued("https://example.com/tail", None),
            ],
        )
        .unwrap();

        let entry = run_publish(&paths).unwrap().unwrap();
        assert_eq!(entry.date, date("2024-01-15"));

        let daily_after: Vec<DailyLink> = ledger::load(&paths.daily_file()).unwrap();
        let queue_after: Vec<QueuedLink> = ledger::load(&paths.queue_file()).unwrap();
        assert_eq!(daily_after.len(), 2);
        assert_eq!(daily_after[0].url, "https://example.com/head");
        assert_eq!(daily_after[0].kind, LinkKind::Article);
        assert_eq!(queue_after.len(), 1);
        assert_eq!(queue_after[0].url, "https://example.com/tail");
    }

    #[test]
    fn test_run_publish_empty_queue_touches_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = SitePaths::new(dir.path());
        ledger::save(&paths.daily_file(), &[daily("2024-01-10")]).unwrap();
        ledger::save(&paths.queue_file(), &Vec::<QueuedLink>::new()).unwrap();
        let daily_before = fs::read(paths.daily_file()).unwrap();
        let queue_before = fs::read(paths.queue_file()).unwrap();

        assert!(run_publish(&paths).unwrap().is_none());
        assert_eq!(fs::read(paths.daily_file()).unwrap(), daily_before);
        assert_eq!(fs::read(paths.queue_file()).unwrap(), queue_before);
    }

    #[test]
    fn test_run_publish_missing_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = SitePaths::new(dir.path());

        assert!(run_publish(&paths).unwrap().is_none());
        assert!(!paths.daily_file().exists());
        assert!(!paths.queue_file().exists());
    }

    #[test]
    fn test_run_publish_conflict_leaves_queue_intact() {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = SitePaths::new(dir.path());
        ledger::save(&paths.daily_file(), &[daily("2024-01-15")]).unwrap();
        ledger::save(
            &paths.queue_file(),
            &[queued("https://example.com/head", Some("2024-01-15"))],
        )
        .unwrap();
        let queue_before = fs::read(paths.queue_file()).unwrap();

        assert!(matches!(run_publish(&paths), Err(AppError::Conflict(_))));
        assert_eq!(fs::read(paths.queue_file()).unwrap(), queue_before);
    }
}
