//! Input validation for production snapshots.
//!
//! Checks structural integrity of a [`ProductionData`] before any view
//! is computed. Detects:
//! - Cross-references pointing past the end of a collection
//! - Scenes with mismatched character / line-count arrays
//! - Characters listed twice in one scene
//! - Negative line counts
//! - Time ranges that end before they start
//! - An all-day or absence record mixed with other records of the same
//!   actor and rehearsal
//!
//! View operations fail fast on the first problem; this module reports
//! all of them at once.

use std::collections::{HashMap, HashSet};

use crate::models::{AttendanceKind, ProductionData};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A character or attendance refers to an actor that doesn't exist.
    InvalidActorReference,
    /// A scene refers to a character that doesn't exist.
    InvalidCharacterReference,
    /// An attendance refers to a rehearsal that doesn't exist.
    InvalidRehearsalReference,
    /// A scene's parallel arrays differ in length.
    RaggedScene,
    /// A character appears twice in one scene.
    DuplicateAppearance,
    /// A line count is negative or not a number.
    InvalidLineCount,
    /// A time range ends before it starts.
    ReversedTimeRange,
    /// All-day or absent combined with other records for one rehearsal.
    ConflictingAttendance,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a production snapshot.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(data: &ProductionData) -> ValidationResult {
    let mut errors = Vec::new();
    let n_actors = data.actors.len();
    let n_characters = data.characters.len();

    for (i, character) in data.characters.iter().enumerate() {
        if let Some(actor) = character.actor_index {
            if actor >= n_actors {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidActorReference,
                    format!(
                        "Character {i} '{}' is cast to unknown actor {actor}",
                        character.name
                    ),
                ));
            }
        }
    }

    for scene in &data.scenes {
        if scene.character_indices.len() != scene.line_counts.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::RaggedScene,
                format!(
                    "Scene '{}' has {} characters but {} line counts",
                    scene.name,
                    scene.character_indices.len(),
                    scene.line_counts.len()
                ),
            ));
        }

        let mut seen = HashSet::new();
        for &c in &scene.character_indices {
            if c >= n_characters {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidCharacterReference,
                    format!("Scene '{}' references unknown character {c}", scene.name),
                ));
            } else if !seen.insert(c) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateAppearance,
                    format!(
                        "Character '{}' appears twice in scene '{}'",
                        data.characters[c].name, scene.name
                    ),
                ));
            }
        }

        if scene.line_counts.iter().any(|&n| n.is_nan() || n < 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidLineCount,
                format!("Scene '{}' has an invalid line count", scene.name),
            ));
        }
    }

    for (i, r) in data.rehearsals.iter().enumerate() {
        if r.end_time < r.start_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReversedTimeRange,
                format!(
                    "Rehearsal {i} on {} ends at {} before it starts at {}",
                    r.date, r.end_time, r.start_time
                ),
            ));
        }
    }

    // (rehearsal, actor) → (record count, has exclusive record)
    let mut per_session: HashMap<(usize, usize), (usize, bool)> = HashMap::new();
    for a in &data.attendances {
        if a.rehearsal >= data.rehearsals.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRehearsalReference,
                format!("Attendance references unknown rehearsal {}", a.rehearsal),
            ));
        }
        if a.actor >= n_actors {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidActorReference,
                format!("Attendance references unknown actor {}", a.actor),
            ));
        }
        if let AttendanceKind::Partial { from, to } = a.kind {
            if to < from {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ReversedTimeRange,
                    format!(
                        "Attendance of actor {} at rehearsal {} runs {from}-{to}",
                        a.actor, a.rehearsal
                    ),
                ));
            }
        }
        let entry = per_session.entry((a.rehearsal, a.actor)).or_default();
        entry.0 += 1;
        entry.1 |= !matches!(a.kind, AttendanceKind::Partial { .. });
    }

    let mut conflicts: Vec<_> = per_session
        .into_iter()
        .filter(|(_, (count, exclusive))| *exclusive && *count > 1)
        .map(|(key, _)| key)
        .collect();
    conflicts.sort_unstable();
    for (rehearsal, actor) in conflicts {
        errors.push(ValidationError::new(
            ValidationErrorKind::ConflictingAttendance,
            format!(
                "Actor {actor} has an all-day or absent record plus others at rehearsal {rehearsal}"
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::warn!(count = errors.len(), "snapshot failed validation");
        Err(errors)
    }
}
