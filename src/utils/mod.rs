//! Utility functions and helpers.

pub mod outputs;
pub mod slug;
pub mod text;

use url::Url;

/// Check whether a string is an absolute http/https URL with a host.
///
/// This is the single URL acceptance rule for the whole toolset; callers
/// supply their own error messages.
pub fn is_http_url(url: &str) -> bool {
    Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some_and(|h| !h.is_empty()))
        .unwrap_or(false)
}
