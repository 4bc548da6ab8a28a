//! Tag source trait and the lofty-backed reader

use anyhow::{Context, Result};
use lofty::prelude::*;
use lofty::probe::Probe;
use std::path::Path;

/// Metadata for one audio file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Playing time in whole seconds
    pub duration_seconds: u64,
}

/// Tag source trait - allows swapping the real tag reader for a fixed one
pub trait TagSource {
    fn read_tags(&self, path: &Path) -> Result<TagRecord>;
}

/// Reads tags and playing time with lofty
pub struct LoftyTagSource;

impl LoftyTagSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoftyTagSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TagSource for LoftyTagSource {
    fn read_tags(&self, path: &Path) -> Result<TagRecord> {
        let tagged_file = Probe::open(path)
            .with_context(|| format!("Failed to open audio file: {:?}", path))?
            .read()
            .with_context(|| format!("Failed to read tags: {:?}", path))?;

        let duration_seconds = tagged_file.properties().duration().as_secs();
        let tag = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag());

        let title = tag
            .and_then(|t| t.title().map(|s| s.to_string()))
            .or_else(|| {
                path.file_stem()
                    .map(|s| s.to_string_lossy().to_string())
            })
            .unwrap_or_default();
        let artist = tag
            .and_then(|t| t.artist().map(|s| s.to_string()))
            .unwrap_or_else(|| "Unknown Artist".to_string());
        let album = tag
            .and_then(|t| t.album().map(|s| s.to_string()))
            .unwrap_or_else(|| "Unknown Album".to_string());

        Ok(TagRecord {
            title,
            artist,
            album,
            duration_seconds,
        })
    }
}
