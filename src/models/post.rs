// src/models/post.rs

//! Imported page record and its on-disk form.

use chrono::NaiveDate;

/// A feed entry normalized into an importable page.
///
/// All fallback and truncation rules have already been applied by the
/// import pipeline; this type only knows how to render itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPage {
    pub title: String,
    pub description: String,
    /// At least one tag; defaulted upstream when the feed has none
    pub tags: Vec<String>,
    /// Canonical URL of the external post
    pub external_url: String,
    /// Stable feed identity used for dedup on later runs
    pub medium_guid: String,
    pub publish_date: NaiveDate,
    /// URL-derived file name stem
    pub slug: String,
}

impl PostPage {
    /// Render the page: a front-matter block and no body, since the page
    /// exists to link out to the external post.
    ///
    /// Scalars are double-quoted with backslashes and quotes escaped, so
    /// arbitrary feed text cannot break the front matter.
    pub fn render(&self) -> String {
        let tags = self
            .tags
            .iter()
            .map(|tag| yaml_quote(tag))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "---\n\
             title: {}\n\
             tags: [{}]\n\
             style: border\n\
             color: warning\n\
             description: {}\n\
             external_url: {}\n\
             medium_guid: {}\n\
             ---\n",
            yaml_quote(&self.title),
            tags,
            yaml_quote(&self.description),
            yaml_quote(&self.external_url),
            yaml_quote(&self.medium_guid),
        )
    }
}

/// Double-quote a YAML scalar, escaping backslashes and double quotes.
fn yaml_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
