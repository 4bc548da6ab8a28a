use crate::error::{PlaylistError, Result};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// Song length as normalized hours, minutes and seconds
///
/// Minutes and seconds are always kept in `0..60`; any overflow is carried
/// upward on construction, so two equal lengths always have equal fields.
/// The total length in seconds always fits in a `u64`, so the projections
/// below never overflow. Field order makes the derived ordering match total
/// length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl Duration {
    pub const ZERO: Duration = Duration::from_total_seconds(0);

    /// Longest representable duration (`u64::MAX` seconds)
    pub const MAX: Duration = Duration::from_total_seconds(u64::MAX);

    /// Create a duration, carrying seconds into minutes and minutes into hours
    ///
    /// Fields whose total exceeds [`Duration::MAX`] are clamped to it; use
    /// [`Duration::try_new`] to reject them instead.
    pub fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self::try_new(hours, minutes, seconds).unwrap_or(Self::MAX)
    }

    /// Create a duration, failing if the total length does not fit in `u64` seconds
    pub fn try_new(hours: u64, minutes: u64, seconds: u64) -> Result<Self> {
        hours
            .checked_mul(3600)
            .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|hm| hm.checked_add(seconds))
            .map(Self::from_total_seconds)
            .ok_or_else(|| {
                PlaylistError::Format(format!(
                    "{}:{}:{} is out of range",
                    hours, minutes, seconds
                ))
            })
    }

    /// Build a duration from an elapsed-seconds count (as reported by tag readers)
    pub const fn from_total_seconds(total: u64) -> Self {
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    /// Parse `H:M:S` text
    ///
    /// Each segment must be a plain run of ASCII digits (surrounding
    /// whitespace allowed); signs and decimals are rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let format_error = || PlaylistError::Format(text.to_string());

        if !text.contains(':') {
            return Err(format_error());
        }

        let fields = text
            .split(':')
            .map(|part| {
                let part = part.trim();
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                part.parse::<u64>().ok()
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(format_error)?;

        match fields[..] {
            [hours, minutes, seconds] => Self::try_new(hours, minutes, seconds),
            _ => Err(format_error()),
        }
    }

    pub fn hours(&self) -> u64 {
        self.hours
    }

    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn to_seconds(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// Whole minutes, seconds truncated
    pub fn to_minutes(&self) -> u64 {
        self.hours * 60 + self.minutes
    }

    /// Whole hours, minutes and seconds truncated
    pub fn to_hours(&self) -> u64 {
        self.hours
    }

    /// Sum of two durations, or `None` if it exceeds [`Duration::MAX`]
    pub fn checked_add(self, other: Duration) -> Option<Duration> {
        self.to_seconds()
            .checked_add(other.to_seconds())
            .map(Self::from_total_seconds)
    }
}

/// Carries seconds into minutes and minutes into hours; clamps at [`Duration::MAX`]
impl Add for Duration {
    type Output = Duration;

    fn add(self, other: Duration) -> Duration {
        self.checked_add(other).unwrap_or(Duration::MAX)
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Self {
        iter.fold(Duration::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Duration>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

impl FromStr for Duration {
    type Err = PlaylistError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Duration> for std::time::Duration {
    fn from(d: Duration) -> Self {
        std::time::Duration::from_secs(d.to_seconds())
    }
}
