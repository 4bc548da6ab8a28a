//! Error types for the playlist model and its persistence

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaylistError {
    /// Input had the wrong shape or type (e.g. a string where an integer was expected)
    #[error("Type error: {0}")]
    Type(String),

    /// Duration text that is not `H:M:S`
    #[error("Invalid duration format: {0:?}")]
    Format(String),

    /// Value-based lookup failed
    #[error("Song not found: {0}")]
    NotFound(String),

    /// Playback requested past the last song with repeat disabled
    #[error("No more songs to play")]
    Exhausted,

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlaylistError>;

impl PlaylistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
