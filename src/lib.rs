//! Music Playlist - songs, playback sequencing and JSON persistence
//!
//! This library models playlists of songs with normalized durations,
//! advances playback with optional shuffle and repeat, and stores
//! playlists as JSON documents.

pub mod codec;
pub mod crawler;
pub mod error;
pub mod model;
pub mod render;

pub use crawler::{CrawlConfig, MusicCrawler};
pub use error::{PlaylistError, Result};
pub use model::{Duration, Playlist, Song};
