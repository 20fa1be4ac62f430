// src/storage/posts.rs

//! Imported page persistence.
//!
//! Pages are Markdown files named `YYYY-MM-DD-slug.md`. Their front matter
//! records the external identity (`external_url`, `medium_guid`) that later
//! runs read back to avoid importing the same post twice.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::Result;
use crate::guard::ExistingPostKeys;

fn external_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*external_url:\s*(.+)$").unwrap())
}

fn medium_guid_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*medium_guid:\s*(.+)$").unwrap())
}

/// Scan every `.md` page under `posts_dir` for recorded identities.
///
/// A missing directory means no pages yet. Values are read line-wise from
/// the front matter with surrounding quotes stripped; files without the
/// keys contribute nothing.
pub fn scan_existing_keys(posts_dir: &Path) -> Result<ExistingPostKeys> {
    let mut keys = ExistingPostKeys::default();
    if !posts_dir.exists() {
        return Ok(keys);
    }

    for entry in fs::read_dir(posts_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
            continue;
        }
        let content = fs::read_to_string(&path)?;
        if let Some(caps) = external_url_re().captures(&content) {
            keys.insert_url(unquote(caps[1].trim()));
        }
        if let Some(caps) = medium_guid_re().captures(&content) {
            keys.insert_guid(unquote(caps[1].trim()));
        }
    }
    Ok(keys)
}

/// Strip at most one leading and one trailing quote character.
fn unquote(value: &str) -> &str {
    let value = value.strip_prefix(['"', '\'']).unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}

/// Compose a page path that does not collide with an existing file:
/// `{date}-{slug}.md`, falling back to `{date}-{slug}-2.md` and so on.
pub fn unique_post_path(posts_dir: &Path, date: NaiveDate, slug: &str) -> PathBuf {
    let stem = format!("{date}-{slug}");
    let mut path = posts_dir.join(format!("{stem}.md"));
    let mut suffix = 2;
    while path.exists() {
        path = posts_dir.join(format!("{stem}-{suffix}.md"));
        suffix += 1;
    }
    path
}

/// Write a page, creating the posts directory on first import.
pub fn write_page(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
