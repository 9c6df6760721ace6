//! Rehearsals, attendance records, and attendance slots.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// One rehearsal session.
///
/// `date` and `place` are carried for display only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rehearsal {
    /// Calendar date, as supplied by the host (e.g. `2019-08-30`).
    pub date: String,
    /// Venue label.
    pub place: String,
    /// Session start.
    pub start_time: TimeOfDay,
    /// Session end.
    pub end_time: TimeOfDay,
}

impl Rehearsal {
    /// Creates a rehearsal.
    pub fn new(
        date: impl Into<String>,
        place: impl Into<String>,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
    ) -> Self {
        Self {
            date: date.into(),
            place: place.into(),
            start_time,
            end_time,
        }
    }
}

/// How an actor attends a rehearsal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttendanceKind {
    /// Present for the whole session.
    AllDay,
    /// Not coming.
    Absent,
    /// Present between two times.
    Partial { from: TimeOfDay, to: TimeOfDay },
}

/// An actor's attendance at one rehearsal.
///
/// An actor may have several partial records for the same rehearsal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attendance {
    /// Index of the rehearsal.
    pub rehearsal: usize,
    /// Index of the actor.
    pub actor: usize,
    /// Attendance kind.
    #[serde(flatten)]
    pub kind: AttendanceKind,
}

impl Attendance {
    /// All-day attendance.
    pub fn all_day(rehearsal: usize, actor: usize) -> Self {
        Self {
            rehearsal,
            actor,
            kind: AttendanceKind::AllDay,
        }
    }

    /// Absence.
    pub fn absent(rehearsal: usize, actor: usize) -> Self {
        Self {
            rehearsal,
            actor,
            kind: AttendanceKind::Absent,
        }
    }

    /// Partial attendance.
    pub fn partial(rehearsal: usize, actor: usize, from: TimeOfDay, to: TimeOfDay) -> Self {
        Self {
            rehearsal,
            actor,
            kind: AttendanceKind::Partial { from, to },
        }
    }

    /// The `[in, out]` interval of this record within `rehearsal`,
    /// clamped to the session. `None` for an absence.
    pub fn interval_within(&self, rehearsal: &Rehearsal) -> Option<(TimeOfDay, TimeOfDay)> {
        let (start, end) = (rehearsal.start_time, rehearsal.end_time);
        match self.kind {
            AttendanceKind::Absent => None,
            AttendanceKind::AllDay => Some((start, end)),
            AttendanceKind::Partial { from, to } => {
                Some((from.clamp_to(start, end), to.clamp_to(start, end)))
            }
        }
    }
}

/// Attendance-table cell code: `*` all day, `-` absent, `HH:MM-HH:MM` otherwise.
impl fmt::Display for AttendanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllDay => write!(f, "*"),
            Self::Absent => write!(f, "-"),
            Self::Partial { from, to } => write!(f, "{from}-{to}"),
        }
    }
}

/// A contiguous interval with a fixed set of attending actors.
///
/// Times are kept as received so that layout errors can quote them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceSlot {
    /// Interval start, `HH:MM`.
    pub from_time: String,
    /// Interval end, `HH:MM`.
    pub to_time: String,
    /// Indices of the actors present throughout the interval.
    #[serde(alias = "attendee", default)]
    pub attending: BTreeSet<usize>,
}

impl AttendanceSlot {
    /// Creates a slot with nobody attending.
    pub fn new(from_time: impl Into<String>, to_time: impl Into<String>) -> Self {
        Self {
            from_time: from_time.into(),
            to_time: to_time.into(),
            attending: BTreeSet::new(),
        }
    }

    /// Creates a slot from parsed times.
    pub fn between(from: TimeOfDay, to: TimeOfDay) -> Self {
        Self::new(from.to_string(), to.to_string())
    }

    /// Adds attending actors.
    pub fn with_attending(mut self, actors: impl IntoIterator<Item = usize>) -> Self {
        self.attending.extend(actors);
        self
    }

    /// Whether `actor` is present in this slot.
    #[inline]
    pub fn is_attending(&self, actor: usize) -> bool {
        self.attending.contains(&actor)
    }
}
