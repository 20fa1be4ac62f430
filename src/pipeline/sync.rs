// src/pipeline/sync.rs

//! Medium feed import.
//!
//! Fetches the author's RSS feed, normalizes each item into a page record,
//! and writes the pages that are not already on disk. Already-imported and
//! malformed items are skipped quietly; a run only fails when the feed
//! itself is unusable or a write fails.

use std::path::Path;

use crate::config::{SiteConfig, SitePaths};
use crate::error::{AppError, Result};
use crate::feed::{self, FeedEntry};
use crate::guard::ExistingPostKeys;
use crate::models::PostPage;
use crate::storage::posts;
use crate::utils::{is_http_url, slug, text};

/// Default per-run import cap.
pub const DEFAULT_MAX_POSTS: usize = 5;
/// Description length cap in grapheme clusters, marker included.
const DESCRIPTION_MAX_LEN: usize = 240;
/// Tag applied when the feed supplies no categories.
const DEFAULT_TAG: &str = "medium";
/// Title for entries whose title strips down to nothing.
const FALLBACK_TITLE: &str = "Untitled Medium Post";
/// Description for entries whose description strips down to nothing.
const FALLBACK_DESCRIPTION: &str = "Read this post on Medium.";

/// Options for one import run.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Medium username; falls back to `author.medium` in `_config.yml`
    pub username: Option<String>,
    /// Explicit feed URL; overrides the username entirely
    pub feed_url: Option<String>,
    /// Per-run import cap; must be positive
    pub max_posts: usize,
}

/// What an import run did.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub imported: usize,
}

impl SyncReport {
    pub fn changed(&self) -> bool {
        self.imported > 0
    }
}

/// Fetch the feed and import new posts as pages.
pub async fn run_sync(paths: &SitePaths, options: &SyncOptions) -> Result<SyncReport> {
    if options.max_posts == 0 {
        return Err(AppError::validation("--max-posts must be greater than 0."));
    }

    let feed_url = resolve_feed_url(paths, options)?;
    log::info!("Fetching feed {feed_url}");
    let entries = feed::fetch_entries(&feed_url).await?;
    log::debug!("Feed yielded {} item(s)", entries.len());

    let posts_dir = paths.posts_dir();
    let mut keys = posts::scan_existing_keys(&posts_dir)?;
    log::debug!("Found {} previously imported page(s)", keys.url_count());

    let report = import_entries(&posts_dir, &entries, &mut keys, options.max_posts)?;

    if report.changed() {
        log::info!("Imported {} Medium post(s).", report.imported);
    } else {
        log::info!("No new Medium posts to import.");
    }
    Ok(report)
}

/// Resolve the feed source: an explicit URL wins, else a URL derived from
/// the username given on the command line or found in `_config.yml`.
fn resolve_feed_url(paths: &SitePaths, options: &SyncOptions) -> Result<String> {
    if let Some(feed_url) = trimmed(options.feed_url.as_deref()) {
        if !is_http_url(feed_url) {
            return Err(AppError::validation(
                "Invalid --feed-url. Use a full http/https URL.",
            ));
        }
        return Ok(feed_url.to_string());
    }

    let username = match trimmed(options.username.as_deref()) {
        Some(name) => Some(name.to_string()),
        None => SiteConfig::load(&paths.config_file())?.medium_username(),
    };
    let Some(username) = username else {
        return Err(AppError::validation(
            "Medium username not found. Pass --username or set author.medium in _config.yml.",
        ));
    };
    Ok(format!("https://medium.com/feed/@{username}"))
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Import entries in order until the cap is reached.
///
/// Entries without a link and entries already known to `keys` are skipped;
/// skips do not count toward the cap. Each written page is added to `keys`
/// so duplicates within a single feed cannot import twice.
fn import_entries(
    posts_dir: &Path,
    entries: &[FeedEntry],
    keys: &mut ExistingPostKeys,
    max_posts: usize,
) -> Result<SyncReport> {
    let mut report = SyncReport::default();

    for entry in entries {
        if report.imported >= max_posts {
            break;
        }
        if entry.link.is_empty() {
            log::debug!("Skipping feed item without a link");
            continue;
        }
        if keys.contains(&entry.link, entry.external_id()) {
            log::debug!("Skipping already imported post: {}", entry.link);
            continue;
        }

        let page = normalize_entry(entry);
        let path = posts::unique_post_path(posts_dir, page.publish_date, &page.slug);
        posts::write_page(&path, &page.render())?;
        keys.insert(&page.external_url, &page.medium_guid);
        report.imported += 1;

        if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            log::info!("Imported {name}");
        }
    }

    Ok(report)
}

/// Normalize a feed entry into a page record.
///
/// Title and description are stripped of markup, the description capped at
/// [`DESCRIPTION_MAX_LEN`]. Blank results take fixed fallbacks, as does an
/// entry with no categories; the guid doubles as the external identity.
fn normalize_entry(entry: &FeedEntry) -> PostPage {
    let title = text::strip_html(&entry.title);
    let title = if title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title
    };

    let description = text::truncate(&text::strip_html(&entry.description), DESCRIPTION_MAX_LEN);
    let description = if description.is_empty() {
        FALLBACK_DESCRIPTION.to_string()
    } else {
        description
    };

    let mut tags: Vec<String> = Vec::new();
    for category in &entry.categories {
        let tag = text::strip_html(category);
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    if tags.is_empty() {
        tags.push(DEFAULT_TAG.to_string());
    }

    PostPage {
        title,
        description,
        tags,
        external_url: entry.link.clone(),
        medium_guid: entry.external_id().to_string(),
        publish_date: entry.published.date_naive(),
        slug: slug::slug_from_url(&entry.link),
    }
}
