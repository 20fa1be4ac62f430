// src/utils/text.rs

//! Pure text transforms for feed-sourced content.
//!
//! Feed titles and descriptions arrive with embedded markup and entities.
//! `strip_html` reduces them to plain single-line text; `truncate` caps
//! display length in grapheme clusters so multi-byte text is never split.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use unicode_segmentation::UnicodeSegmentation;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").unwrap())
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn entity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"&(#[0-9]+|#[xX][0-9A-Fa-f]+|[A-Za-z]+);").unwrap())
}

/// Strip markup from a feed string: tags removed, whitespace collapsed,
/// HTML entities decoded, ends trimmed.
///
/// Tags are replaced with spaces before entities are decoded, so encoded
/// markup like `&lt;b&gt;` survives as literal text rather than being
/// stripped a second time.
pub fn strip_html(text: &str) -> String {
    let without_tags = tag_re().replace_all(text, " ");
    let collapsed = whitespace_re().replace_all(&without_tags, " ");
    decode_entities(collapsed.trim())
}

/// Decode numeric and common named HTML entities in a single pass.
///
/// Unknown names and out-of-range code points are left as-is.
fn decode_entities(text: &str) -> String {
    entity_re()
        .replace_all(text, |caps: &Captures| {
            let body = &caps[1];
            if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
                return decode_codepoint(hex, 16).unwrap_or_else(|| caps[0].to_string());
            }
            if let Some(dec) = body.strip_prefix('#') {
                return decode_codepoint(dec, 10).unwrap_or_else(|| caps[0].to_string());
            }
            let decoded = match body {
                "amp" => "&",
                "lt" => "<",
                "gt" => ">",
                "quot" => "\"",
                "apos" => "'",
                "nbsp" => " ",
                "hellip" => "\u{2026}",
                "ndash" => "\u{2013}",
                "mdash" => "\u{2014}",
                "lsquo" => "\u{2018}",
                "rsquo" => "\u{2019}",
                "ldquo" => "\u{201c}",
                "rdquo" => "\u{201d}",
                _ => return caps[0].to_string(),
            };
            decoded.to_string()
        })
        .into_owned()
}

fn decode_codepoint(digits: &str, radix: u32) -> Option<String> {
    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
        .map(String::from)
}

/// Truncate `text` to at most `max` grapheme clusters.
///
/// Text over the limit is cut to `max - 1` clusters, right-trimmed, and
/// finished with an ellipsis, so the result never exceeds `max`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.graphemes(true).count() <= max {
        return text.to_string();
    }
    let cut: String = text.graphemes(true).take(max.saturating_sub(1)).collect();
    format!("{}\u{2026}", cut.trim_end())
}
