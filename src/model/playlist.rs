use super::{Duration, Song};
use crate::error::{PlaylistError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// An ordered list of songs together with its playback state
///
/// `played` is the playback history since the last (re)start. Mutating
/// methods take `&mut self`; callers sharing a playlist between threads must
/// wrap it in a lock, since `next_song` reads and then rewrites both lists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Playlist {
    name: String,
    repeat: bool,
    shuffle: bool,
    songs: Vec<Song>,
    played: Vec<Song>,
}

impl Playlist {
    /// Create a new empty playlist with repeat and shuffle off
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Restart from the first song once every song has been played
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    /// Shuffle the song order when playback starts
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub(crate) fn from_parts(
        name: String,
        repeat: bool,
        shuffle: bool,
        songs: Vec<Song>,
        played: Vec<Song>,
    ) -> Self {
        Self {
            name,
            repeat,
            shuffle,
            songs,
            played,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn set_repeat(&mut self, repeat: bool) {
        self.repeat = repeat;
    }

    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Songs played since playback (re)started, oldest first
    pub fn played(&self) -> &[Song] {
        &self.played
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn add_song(&mut self, song: Song) {
        self.songs.push(song);
    }

    pub fn add_songs(&mut self, songs: impl IntoIterator<Item = Song>) {
        self.songs.extend(songs);
    }

    /// Remove the first song equal to `song`
    ///
    /// Playback history is left untouched.
    pub fn remove_song(&mut self, song: &Song) -> Result<Song> {
        let index = self
            .songs
            .iter()
            .position(|s| s == song)
            .ok_or_else(|| PlaylistError::NotFound(song.key()))?;
        Ok(self.songs.remove(index))
    }

    /// Forget playback history so the next call to `next_song` starts over
    pub fn reset_playback(&mut self) {
        self.played.clear();
    }

    /// Advance playback and return the song that is now playing
    ///
    /// Starting playback with shuffle on reorders `songs` in place; the new
    /// order is kept for the rest of the playlist's life.
    pub fn next_song(&mut self) -> Result<&Song> {
        self.next_song_with_rng(&mut rand::thread_rng())
    }

    /// Same as [`Playlist::next_song`] with a caller-supplied random source
    pub fn next_song_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Song> {
        if self.songs.is_empty() {
            return Err(PlaylistError::Exhausted);
        }

        let index = if self.played.is_empty() {
            if self.shuffle {
                self.songs.shuffle(rng);
                log::debug!("Shuffled playlist {:?} ({} songs)", self.name, self.songs.len());
            }
            0
        } else if self.played.len() >= self.songs.len() {
            if !self.repeat {
                return Err(PlaylistError::Exhausted);
            }
            self.played.clear();
            0
        } else {
            // played is non-empty in this branch
            let last = &self.played[self.played.len() - 1];
            let position = self
                .songs
                .iter()
                .position(|s| s == last)
                .ok_or_else(|| PlaylistError::NotFound(last.key()))?;
            if position + 1 >= self.songs.len() {
                return Err(PlaylistError::Exhausted);
            }
            position + 1
        };

        self.played.push(self.songs[index].clone());
        Ok(&self.songs[index])
    }

    /// Combined length of every song
    pub fn total_duration(&self) -> Duration {
        self.songs.iter().map(Song::duration).sum()
    }

    /// Combined length of every song, in seconds
    pub fn total_length(&self) -> u64 {
        self.total_duration().to_seconds()
    }

    /// Number of songs by `artist`
    pub fn count_artist(&self, artist: &str) -> usize {
        self.songs.iter().filter(|s| s.artist() == artist).count()
    }

    /// Song count per artist
    pub fn artist_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for song in &self.songs {
            *counts.entry(song.artist().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// `(artist, title, duration)` rows for table rendering
    pub fn rows(&self) -> Vec<(String, String, String)> {
        self.songs
            .iter()
            .map(|s| {
                (
                    s.artist().to_string(),
                    s.title().to_string(),
                    s.duration().to_string(),
                )
            })
            .collect()
    }
}
