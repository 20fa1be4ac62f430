// src/pipeline/queue.rs

//! Queueing links for later publication.

use crate::config::SitePaths;
use crate::error::{AppError, Result};
use crate::guard;
use crate::models::{DailyLink, QueuedLink, RawLink};
use crate::storage::ledger;

/// Validate a candidate and append it to the queue ledger.
///
/// The URL must not already be queued. A pinned date must be free in both
/// ledgers, so publish day cannot run into a collision that was knowable
/// now. Any failure aborts before anything is written.
pub fn run_queue(paths: &SitePaths, raw: &RawLink) -> Result<QueuedLink> {
    let record = raw.validate()?;

    let daily_path = paths.daily_file();
    let queue_path = paths.queue_file();
    let daily: Vec<DailyLink> = ledger::load(&daily_path)?;
    let mut queue: Vec<QueuedLink> = ledger::load(&queue_path)?;

    if let Some(date) = record.date {
        if guard::daily_date_taken(&daily, date) {
            return Err(AppError::conflict(format!(
                "An entry for {date} already exists in {}.",
                daily_path.display()
            )));
        }
        if guard::queue_date_taken(&queue, date) {
            return Err(AppError::conflict(format!(
                "A queued entry for {date} already exists in {}.",
                queue_path.display()
            )));
        }
    }
    if guard::queue_url_taken(&queue, &record.url) {
        return Err(AppError::conflict(format!(
            "This URL is already queued in {}.",
            queue_path.display()
        )));
    }

    queue.push(record.clone());
    ledger::save(&queue_path, &queue)?;

    log::info!("Queued '{}' in {}", record.title, queue_path.display());
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::run_add;
    use std::fs;

    fn site() -> (tempfile::TempDir, SitePaths) {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = SitePaths::new(dir.path());
        (dir, paths)
    }

    fn raw(url: &str, date: Option<&str>) -> RawLink {
        RawLink {
            title: "A Title".to_string(),
            url: url.to_string(),
            description: "A description".to_string(),
            kind: "article".to_string(),
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn test_queue_appends_fifo() {
        let (_dir, paths) = site();

        run_queue(&paths, &raw("https://example.com/a", None)).unwrap();
        run_queue(&paths, &raw("https://example.com/b", None)).unwrap();

        let queue: Vec<QueuedLink> = ledger::load(&paths.queue_file()).unwrap();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0].url, "https://example.com/a");
        assert_eq!(queue[1].url, "https://example.com/b");
    }

    #[test]
    fn test_queue_undated_urls_never_conflict_on_date() {
        let (_dir, paths) = site();

        run_queue(&paths, &raw("https://example.com/a", None)).unwrap();
        run_queue(&paths, &raw("https://example.com/b", None)).unwrap();

        let queue: Vec<QueuedLink> = ledger::load(&paths.queue_file()).unwrap();
        assert!(queue.iter().all(|entry| entry.date.is_none()));
    }

    #[test]
    fn test_queue_rejects_duplicate_url() {
        let (_dir, paths) = site();
        run_queue(&paths, &raw("https://example.com/a", None)).unwrap();
        let before = fs::read(paths.queue_file()).unwrap();

        let result = run_queue(&paths, &raw("  https://example.com/a  ", None));
        match result {
            Err(AppError::Conflict(message)) => {
                assert!(message.starts_with("This URL is already queued in"));
            }
            other => panic!("expected conflict, got {other:?}"),
        }
        assert_eq!(fs::read(paths.queue_file()).unwrap(), before);
    }

    #[test]
    fn test_queue_rejects_date_taken_in_daily() {
        let (_dir, paths) = site();
        run_add(&paths, &raw("https://example.com/published", Some("2024-01-15"))).unwrap();

        let result = run_queue(&paths, &raw("https://example.com/new", Some("2024-01-15")));
        match result {
            Err(AppError::Conflict(message)) => {
                assert!(message.starts_with("An entry for 2024-01-15 already exists in"));
            }
            other => panic!("expected conflict, got {other:?}"),
        }
        assert!(!paths.queue_file().exists());
    }

    #[test]
    fn test_queue_rejects_date_taken_in_queue() {
        let (_dir, paths) = site();
        run_queue(&paths, &raw("https://example.com/a", Some("2024-01-15"))).unwrap();

        let result = run_queue(&paths, &raw("https://example.com/b", Some("2024-01-15")));
        match result {
            Err(AppError::Conflict(message)) => {
                assert!(message.starts_with("A queued entry for 2024-01-15 already exists in"));
            }
            other => panic!("expected conflict, got {other:?}"),
        }

        let queue: Vec<QueuedLink> = ledger::load(&paths.queue_file()).unwrap();
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_queue_same_url_as_daily_is_allowed() {
        // URL uniqueness applies within the queue only.
        let (_dir, paths) = site();
        run_add(&paths, &raw("https://example.com/a", Some("2024-01-15"))).unwrap();

        run_queue(&paths, &raw("https://example.com/a", None)).unwrap();
        let queue: Vec<QueuedLink> = ledger::load(&paths.queue_file()).unwrap();
        assert_eq!(queue.len(), 1);
    }
}
