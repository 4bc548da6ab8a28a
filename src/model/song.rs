use super::Duration;
use crate::error::Result;
use std::fmt;

/// Duration as handed to [`Song::new`]: either `H:M:S` text or a ready value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationInput {
    Text(String),
    Value(Duration),
}

impl DurationInput {
    fn resolve(self) -> Result<Duration> {
        match self {
            DurationInput::Text(text) => Duration::parse(&text),
            DurationInput::Value(duration) => Ok(duration),
        }
    }
}

impl From<&str> for DurationInput {
    fn from(text: &str) -> Self {
        DurationInput::Text(text.to_string())
    }
}

impl From<String> for DurationInput {
    fn from(text: String) -> Self {
        DurationInput::Text(text)
    }
}

impl From<Duration> for DurationInput {
    fn from(duration: Duration) -> Self {
        DurationInput::Value(duration)
    }
}

/// Unit for [`Song::length`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
}

/// A single song and its metadata
///
/// Songs are immutable once built; equality is structural over all fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Song {
    title: String,
    artist: String,
    album: String,
    duration: Duration,
}

impl Song {
    /// Create a song, parsing the duration if it was given as text
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        duration: impl Into<DurationInput>,
    ) -> Result<Self> {
        let duration = duration.into().resolve()?;
        Ok(Self::from_parts(title, artist, album, duration))
    }

    /// Create a song from an already-built duration
    pub fn from_parts(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            duration,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Song length truncated to whole units
    pub fn length(&self, unit: TimeUnit) -> u64 {
        match unit {
            TimeUnit::Seconds => self.duration.to_seconds(),
            TimeUnit::Minutes => self.duration.to_minutes(),
            TimeUnit::Hours => self.duration.to_hours(),
        }
    }

    /// Stable identity string: `title-artist-H:M:S`
    pub fn key(&self) -> String {
        format!("{}-{}-{}", self.title, self.artist, self.duration)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.title, self.artist, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaylistError;

    #[test]
    fn test_song_from_text_duration() {
        let song = Song::new("Umbrella", "Rihanna", "Good Girl Gone Bad", "0:4:35").unwrap();
        assert_eq!(song.title(), "Umbrella");
        assert_eq!(song.artist(), "Rihanna");
        assert_eq!(song.album(), "Good Girl Gone Bad");
        assert_eq!(song.duration(), Duration::new(0, 4, 35));
    }

    #[test]
    fn test_song_from_duration_value() {
        let duration = Duration::from_total_seconds(200);
        let song = Song::new("Stay", "Rihanna", "Unapologetic", duration).unwrap();
        assert_eq!(song.duration(), duration);
    }

    #[test]
    fn test_text_without_separator_is_format_error() {
        let result = Song::new("Stay", "Rihanna", "Unapologetic", "240");
        assert!(matches!(result, Err(PlaylistError::Format(_))));
    }

    #[test]
    fn test_empty_strings_are_allowed() {
        let song = Song::new("", "", "", "0:0:1").unwrap();
        assert_eq!(song.title(), "");
    }

    #[test]
    fn test_equality_is_structural() {
        let a = Song::new("Stay", "Rihanna", "Unapologetic", "0:4:0").unwrap();
        let b = Song::new("Stay", "Rihanna", "Unapologetic", Duration::new(0, 3, 60)).unwrap();
        let c = Song::new("Stay", "Rihanna", "Live", "0:4:0").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_key_and_display() {
        let song = Song::new("Stay", "Rihanna", "Unapologetic", "0:4:0").unwrap();
        assert_eq!(song.key(), "Stay-Rihanna-0:4:0");
        assert_eq!(song.to_string(), "Stay - Rihanna - 0:4:0");
    }

    #[test]
    fn test_length_units() {
        let song = Song::new("Long", "Band", "Live", "1:30:45").unwrap();
        assert_eq!(song.length(TimeUnit::Seconds), 5445);
        assert_eq!(song.length(TimeUnit::Minutes), 90);
        assert_eq!(song.length(TimeUnit::Hours), 1);
    }
}
