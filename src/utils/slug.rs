// src/utils/slug.rs

//! Filesystem-safe slugs derived from post URLs.

use url::Url;

/// Slug used when a URL yields no usable path segment.
pub const FALLBACK_SLUG: &str = "medium-post";

/// Derive a slug from the last non-empty path segment of a URL.
///
/// The segment is lower-cased, runs of anything outside `a-z0-9` collapse
/// to a single hyphen, and leading/trailing hyphens are dropped. An
/// unparseable URL or an empty result yields [`FALLBACK_SLUG`].
pub fn slug_from_url(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return FALLBACK_SLUG.to_string();
    };
    let segment = parsed
        .path_segments()
        .and_then(|segments| segments.rev().find(|s| !s.is_empty()))
        .unwrap_or_default();
    let slug = slugify(segment);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

fn slugify(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut pending_hyphen = false;
    for ch in segment.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    out
}
