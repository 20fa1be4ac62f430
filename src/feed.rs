// src/feed.rs

//! Feed boundary: fetch the Medium RSS feed and resolve its items into
//! plain entries.
//!
//! Every optional feed field (guid, timestamps, categories) is resolved
//! here, once, so the import pipeline downstream works with
//! fully-determined values and contains no feed-format conditionals.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rss::{Channel, Item};

use crate::error::{AppError, Result};

/// User-Agent for feed requests.
const USER_AGENT: &str = concat!("curator-medium-sync/", env!("CARGO_PKG_VERSION"));
/// Feed fetch timeout.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// One feed item with its optional fields resolved.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    /// Item title, markup intact (stripped during normalization)
    pub title: String,
    /// Item description, markup intact
    pub description: String,
    /// Trimmed item link; empty for malformed items
    pub link: String,
    /// Trimmed guid, when present and non-blank
    pub guid: Option<String>,
    /// Category names as given by the feed
    pub categories: Vec<String>,
    /// Publish timestamp; `now` when the feed omits or mangles it
    pub published: DateTime<Utc>,
}

impl FeedEntry {
    fn from_item(item: &Item, now: DateTime<Utc>) -> Self {
        let link = item.link().unwrap_or_default().trim().to_string();
        let guid = item
            .guid()
            .map(|guid| guid.value().trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        let categories = item
            .categories()
            .iter()
            .map(|category| category.name().to_string())
            .collect();

        Self {
            title: item.title().unwrap_or_default().to_string(),
            description: item.description().unwrap_or_default().to_string(),
            link,
            guid,
            categories,
            published: item_timestamp(item).unwrap_or(now),
        }
    }

    /// The entry's stable identity: guid when the feed provides one, the
    /// link otherwise.
    pub fn external_id(&self) -> &str {
        self.guid.as_deref().unwrap_or(&self.link)
    }
}

/// Parse an item timestamp from `pubDate` (RFC 2822) or, failing that,
/// from a Dublin Core `dc:date` (RFC 3339).
fn item_timestamp(item: &Item) -> Option<DateTime<Utc>> {
    if let Some(pub_date) = item.pub_date() {
        if let Ok(parsed) = DateTime::parse_from_rfc2822(pub_date) {
            return Some(parsed.with_timezone(&Utc));
        }
    }
    if let Some(dublin_core) = item.dublin_core_ext() {
        for date in dublin_core.dates() {
            if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
                return Some(parsed.with_timezone(&Utc));
            }
        }
    }
    None
}

/// Parse feed XML into entries ordered oldest first.
///
/// The per-run import cap favors older posts, so entries are sorted
/// ascending by publish timestamp before the importer sees them. The sort
/// is stable; entries without a usable timestamp keep their feed order.
pub fn parse_entries(xml: &str, now: DateTime<Utc>) -> Result<Vec<FeedEntry>> {
    let channel = xml.parse::<Channel>()?;
    let mut entries: Vec<FeedEntry> = channel
        .items()
        .iter()
        .map(|item| FeedEntry::from_item(item, now))
        .collect();
    entries.sort_by_key(|entry| entry.published);
    Ok(entries)
}

/// Fetch and parse a feed. Yielding zero entries is an error: Medium
/// serves an empty feed for unknown usernames.
pub async fn fetch_entries(feed_url: &str) -> Result<Vec<FeedEntry>> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()?;

    let xml = fetch_xml(&client, feed_url)
        .await
        .map_err(|e| AppError::feed(format!("Failed to fetch feed {feed_url}: {e}")))?;

    let entries = parse_entries(&xml, Utc::now())
        .map_err(|e| AppError::feed(format!("Failed to parse feed {feed_url}: {e}")))?;
    if entries.is_empty() {
        return Err(AppError::feed(format!("No items found in feed: {feed_url}")));
    }
    Ok(entries)
}

async fn fetch_xml(client: &reqwest::Client, feed_url: &str) -> reqwest::Result<String> {
    client
        .get(feed_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}
