//! Time-of-day values.
//!
//! # Time Model
//! All times are minutes since midnight of the rehearsal day. The text
//! form is `HH:MM`, both parts base-10. A trailing `:SS` part is accepted
//! and dropped, so values written by the server as full times still parse.
//!
//! Hours are not capped at 23: `24:00` is a valid closing time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A time string that is not `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed time '{raw}', expected HH:MM")]
pub struct InvalidTime {
    /// The rejected input, verbatim.
    pub raw: String,
}

/// Minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    minutes: u32,
}

impl TimeOfDay {
    /// Creates a time from hours and minutes.
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self {
            minutes: hours * 60 + minutes,
        }
    }

    /// Creates a time from minutes since midnight.
    pub fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Parses `HH:MM`, returning `None` if either part is not a base-10 integer.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.trim().split(':');
        let hours = parse_part(parts.next()?)?;
        let minutes = parse_part(parts.next()?)?;
        if let Some(seconds) = parts.next() {
            parse_part(seconds)?;
        }
        if parts.next().is_some() {
            return None;
        }
        let total = hours.checked_mul(60)?.checked_add(minutes)?;
        Some(Self::from_minutes(total))
    }

    /// Restricts this time to `[start, end]`.
    ///
    /// `end` wins if the bounds are inverted.
    pub fn clamp_to(self, start: Self, end: Self) -> Self {
        self.max(start).min(end)
    }

    /// Signed span from `self` to `later`, in minutes.
    #[inline]
    pub fn minutes_until(&self, later: Self) -> i64 {
        i64::from(later.minutes) - i64::from(self.minutes)
    }
}

fn parse_part(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

impl FromStr for TimeOfDay {
    type Err = InvalidTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidTime { raw: s.to_string() })
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
