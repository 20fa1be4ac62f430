// src/config.rs

//! Site layout and site-wide configuration.
//!
//! All paths the tools touch hang off a single site root, so the whole
//! toolset can be pointed at a checkout with one flag.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Daily ledger file, relative to the site root.
const DAILY_FILE: &str = "_data/daily_links.yml";
/// Queue ledger file, relative to the site root.
const QUEUE_FILE: &str = "_data/daily_links_queue.yml";
/// Imported pages directory, relative to the site root.
const POSTS_DIR: &str = "_posts";
/// Site-wide configuration file, relative to the site root.
const CONFIG_FILE: &str = "_config.yml";

/// Well-known file locations under a site root.
#[derive(Debug, Clone)]
pub struct SitePaths {
    root: PathBuf,
}

impl SitePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn daily_file(&self) -> PathBuf {
        self.root.join(DAILY_FILE)
    }

    pub fn queue_file(&self) -> PathBuf {
        self.root.join(QUEUE_FILE)
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.root.join(POSTS_DIR)
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }
}

/// Site-wide configuration (`_config.yml`).
///
/// The file belongs to the site generator and holds far more than these
/// tools need; only the keys used here are modeled, and anything that
/// does not fit is treated as absent rather than an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    author: Option<AuthorConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AuthorConfig {
    #[serde(default)]
    medium: Option<String>,
}

impl SiteConfig {
    /// Load the site configuration, treating a missing file as empty.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        match serde_yaml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("Could not read {}: {e}. Using defaults.", path.display());
                Ok(Self::default())
            }
        }
    }

    /// The configured Medium username, if any. Blank counts as unset.
    pub fn medium_username(&self) -> Option<String> {
        self.author
            .as_ref()
            .and_then(|author| author.medium.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_site_paths() {
        let paths = SitePaths::new("/site");
        assert_eq!(paths.daily_file(), Path::new("/site/_data/daily_links.yml"));
        assert_eq!(
            paths.queue_file(),
            Path::new("/site/_data/daily_links_queue.yml")
        );
        assert_eq!(paths.posts_dir(), Path::new("/site/_posts"));
        assert_eq!(paths.config_file(), Path::new("/site/_config.yml"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = SiteConfig::load(&dir.path().join("_config.yml")).unwrap();
        assert_eq!(config.medium_username(), None);
    }

    #[test]
    fn test_medium_username() {
        let (_dir, path) = write_config("title: My Site\nauthor:\n  name: Someone\n  medium: someuser\n");
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.medium_username(), Some("someuser".to_string()));
    }

    #[test]
    fn test_medium_username_blank_is_unset() {
        let (_dir, path) = write_config("author:\n  medium: \"  \"\n");
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.medium_username(), None);
    }

    #[test]
    fn test_unexpected_shape_is_empty() {
        let (_dir, path) = write_config("- just\n- a\n- list\n");
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.medium_username(), None);
    }
}
