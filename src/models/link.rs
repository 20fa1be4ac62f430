// src/models/link.rs

//! Daily-link and queue-entry data structures.
//!
//! Two record shapes share the same fields but differ on `date`: a queued
//! entry may carry a pinned date or none, while a published daily entry
//! always has one. Field order in each struct is the order the YAML
//! ledgers are written in.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, Result};
use crate::utils::is_http_url;

/// Allowed link categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Article,
    Video,
    Tool,
}

impl LinkKind {
    /// Accepted values, for error messages.
    pub const ALLOWED: &'static str = "article, video, tool";

    /// Parse a lower-cased kind string.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "article" => Some(Self::Article),
            "video" => Some(Self::Video),
            "tool" => Some(Self::Tool),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::Tool => "tool",
        }
    }
}

/// Raw candidate fields as captured from the command line, before
/// validation.
#[derive(Debug, Clone, Default)]
pub struct RawLink {
    pub title: String,
    pub url: String,
    pub description: String,
    /// Kind as typed by the user; checked against [`LinkKind`]
    pub kind: String,
    /// Optional `YYYY-MM-DD` date string
    pub date: Option<String>,
}

impl RawLink {
    /// Validate and normalize into a queue-shaped record.
    ///
    /// Every field is trimmed and the kind lower-cased before checking.
    /// Rules run in a fixed order and the first violation wins, so error
    /// messages are deterministic. A blank date counts as absent.
    pub fn validate(&self) -> Result<QueuedLink> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AppError::validation("title is required"));
        }
        let url = self.url.trim();
        if url.is_empty() {
            return Err(AppError::validation("url is required"));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(AppError::validation("description is required"));
        }
        let kind = self.kind.trim().to_lowercase();
        if kind.is_empty() {
            return Err(AppError::validation("type is required"));
        }
        let kind = LinkKind::parse(&kind).ok_or_else(|| {
            AppError::validation(format!("type must be one of: {}", LinkKind::ALLOWED))
        })?;
        if !is_http_url(url) {
            return Err(AppError::validation("Invalid URL. Use a full http/https URL."));
        }
        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(parse_iso_date(value)?),
        };

        Ok(QueuedLink {
            title: title.to_string(),
            url: url.to_string(),
            description: description.to_string(),
            kind,
            date,
        })
    }
}

/// Parse a user-supplied `YYYY-MM-DD` date.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date '{value}'. Use YYYY-MM-DD.")))
}

/// A pending link in the queue ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedLink {
    pub title: String,
    pub url: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: LinkKind,
    /// Pinned publish date; assigned at publish time when absent
    #[serde(
        default,
        deserialize_with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,
}

impl QueuedLink {
    /// Consume this entry into a published daily link.
    pub fn publish(self, date: NaiveDate) -> DailyLink {
        DailyLink {
            date,
            title: self.title,
            url: self.url,
            description: self.description,
            kind: self.kind,
        }
    }

    /// Re-check required-field invariants on an entry read back from disk.
    ///
    /// Entries are validated when queued, so a blank field here means the
    /// ledger was edited into a bad state after the fact.
    pub fn integrity_check(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::integrity("Queue entry title is required."));
        }
        if self.url.trim().is_empty() {
            return Err(AppError::integrity("Queue entry url is required."));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::integrity("Queue entry description is required."));
        }
        if !is_http_url(self.url.trim()) {
            return Err(AppError::integrity(format!(
                "Invalid URL '{}'. Use full http/https URL.",
                self.url.trim()
            )));
        }
        Ok(())
    }
}

/// A published link in the daily ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLink {
    pub date: NaiveDate,
    pub title: String,
    pub url: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: LinkKind,
}

/// Deserialize an optional ledger date, treating null and blank strings
/// as absent.
fn optional_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
