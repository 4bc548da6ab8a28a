//! JSON persistence for playlists
//!
//! A playlist is written as a single pretty-printed object holding `name`,
//! `repeat`, `shuffle`, `songs` and `played`. Every song is a flat object
//! whose `duration` is a nested `{hours, minutes, seconds}` object.

mod document;
mod file;

pub use document::{DurationRecord, PlaylistDocument, SongRecord};
pub use file::{file_name, load, save, write_json};

use crate::error::{PlaylistError, Result};
use crate::model::{Duration, Playlist, Song};
use serde::Deserialize;
use serde_json::{json, Value};

/// Convert a playlist into its JSON document
pub fn serialize(playlist: &Playlist) -> Value {
    json!({
        "name": playlist.name(),
        "repeat": playlist.repeat(),
        "shuffle": playlist.shuffle(),
        "songs": song_list(playlist.songs()),
        "played": song_list(playlist.played()),
    })
}

fn song_list(songs: &[Song]) -> Value {
    Value::Array(songs.iter().map(song_value).collect())
}

fn song_value(song: &Song) -> Value {
    json!({
        "title": song.title(),
        "artist": song.artist(),
        "album": song.album(),
        "duration": duration_value(song.duration()),
    })
}

fn duration_value(duration: Duration) -> Value {
    json!({
        "hours": duration.hours(),
        "minutes": duration.minutes(),
        "seconds": duration.seconds(),
    })
}

/// Rebuild a playlist from a JSON document
///
/// Any field of the wrong type (or missing) is a [`PlaylistError::Type`];
/// values are never coerced.
pub fn deserialize(document: &Value) -> Result<Playlist> {
    let document =
        PlaylistDocument::deserialize(document).map_err(|e| PlaylistError::Type(e.to_string()))?;
    document.into_playlist()
}
