//! Decoding records for the JSON playlist document
//!
//! These mirror the on-disk layout field by field and are kept separate from
//! the model types so the format does not drift when the model changes.

use crate::error::{PlaylistError, Result};
use crate::model::{Duration, Playlist, Song};
use serde::Deserialize;

/// Top-level playlist document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaylistDocument {
    pub name: String,
    pub repeat: bool,
    pub shuffle: bool,
    pub songs: Vec<SongRecord>,
    pub played: Vec<SongRecord>,
}

/// Flat song record with a nested duration object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SongRecord {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: DurationRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DurationRecord {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TryFrom<DurationRecord> for Duration {
    type Error = PlaylistError;

    /// Fields are normalized; a total beyond `u64::MAX` seconds is a type error
    fn try_from(r: DurationRecord) -> Result<Self> {
        Duration::try_new(r.hours, r.minutes, r.seconds)
            .map_err(|e| PlaylistError::Type(format!("duration: {e}")))
    }
}

impl SongRecord {
    pub fn into_song(self) -> Result<Song> {
        let duration = Duration::try_from(self.duration)?;
        Ok(Song::from_parts(self.title, self.artist, self.album, duration))
    }
}

impl PlaylistDocument {
    pub fn into_playlist(self) -> Result<Playlist> {
        let songs = self
            .songs
            .into_iter()
            .map(SongRecord::into_song)
            .collect::<Result<Vec<_>>>()?;
        let played = self
            .played
            .into_iter()
            .map(SongRecord::into_song)
            .collect::<Result<Vec<_>>>()?;

        Ok(Playlist::from_parts(
            self.name,
            self.repeat,
            self.shuffle,
            songs,
            played,
        ))
    }
}
