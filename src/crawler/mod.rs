//! Music directory crawling
//!
//! Walks a directory for audio files, reads their tags through a
//! [`TagSource`] and turns them into a [`Playlist`].

mod config;
mod tags;

pub use config::CrawlConfig;
pub use tags::{LoftyTagSource, TagRecord, TagSource};

use crate::model::{Duration, Playlist, Song};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Builds playlists from a directory of audio files
pub struct MusicCrawler<T: TagSource> {
    config: CrawlConfig,
    tags: T,
}

impl<T: TagSource + Sync> MusicCrawler<T> {
    pub fn new(config: CrawlConfig, tags: T) -> Self {
        Self { config, tags }
    }

    /// Audio files under the configured root, sorted by path
    pub fn audio_files(&self) -> Result<Vec<PathBuf>> {
        let mut walker = WalkDir::new(&self.config.root).follow_links(self.config.follow_links);
        if !self.config.recursive {
            walker = walker.max_depth(1);
        }

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry
                .with_context(|| format!("Failed to scan {:?}", self.config.root))?;
            if entry.file_type().is_file() && self.config.accepts(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Scan the root and build a playlist from every readable audio file
    ///
    /// Files whose tags cannot be read are skipped with a warning.
    pub fn generate_playlist(&self, name: &str) -> Result<Playlist> {
        log::info!("Scanning {:?} for audio files", self.config.root);
        let files = self.audio_files()?;
        log::info!("Found {} audio file(s)", files.len());

        let songs: Vec<Option<Song>> = files
            .par_iter()
            .map(|path| match self.tags.read_tags(path) {
                Ok(record) => {
                    log::debug!("Read tags: {} - {}", record.artist, record.title);
                    Some(song_from_record(record))
                }
                Err(e) => {
                    log::warn!("Skipping {:?}: {:#}", path, e);
                    None
                }
            })
            .collect();

        let mut playlist = Playlist::new(name);
        playlist.add_songs(songs.into_iter().flatten());

        log::info!("Playlist {:?}: {} songs", name, playlist.len());
        Ok(playlist)
    }
}

/// Convert a tag record into a song
pub fn song_from_record(record: TagRecord) -> Song {
    Song::from_parts(
        record.title,
        record.artist,
        record.album,
        Duration::from_total_seconds(record.duration_seconds),
    )
}
