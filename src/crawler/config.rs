//! Crawl configuration

use std::path::{Path, PathBuf};

/// Which files a [`MusicCrawler`](super::MusicCrawler) picks up
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Directory to scan
    pub root: PathBuf,

    /// Accepted file extensions, lowercase, without the dot
    pub extensions: Vec<String>,

    /// Descend into subdirectories (default: only the top level)
    pub recursive: bool,

    /// Follow symbolic links while walking
    pub follow_links: bool,
}

impl CrawlConfig {
    /// Create a configuration that scans `root` for MP3 files
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extensions: vec!["mp3".to_string()],
            recursive: false,
            follow_links: false,
        }
    }

    /// Replace the accepted extensions
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Whether `path` has one of the accepted extensions (case-insensitive)
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }
}
