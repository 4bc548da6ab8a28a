//! Playlist data model
//!
//! Durations, songs and playlists, independent of where the song
//! metadata comes from or how a playlist is stored.

mod duration;
mod playlist;
mod song;

pub use duration::Duration;
pub use playlist::Playlist;
pub use song::{DurationInput, Song, TimeUnit};
