//! Appearance matrix.
//!
//! A dense `scenes × entities` table of line counts, where entities are
//! either characters or actors. [`NOT_APPEARING`] marks a cell whose
//! entity is not in the scene. It ranks below every real count, so an
//! entity that appears with zero lines (`0`) still ranks above one that
//! does not appear at all.

use serde::{Deserialize, Serialize};

use super::{Character, LineCount, Scene};
use crate::error::{Result, ViewError};

/// Cell value for "does not appear in this scene".
pub const NOT_APPEARING: LineCount = -1.0;

/// Rectangular table of appearance counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(try_from = "Vec<Vec<LineCount>>", into = "Vec<Vec<LineCount>>")]
pub struct AppearanceMatrix {
    rows: Vec<Vec<LineCount>>,
    width: usize,
}

impl AppearanceMatrix {
    /// Wraps the given rows, rejecting ragged input.
    ///
    /// The width of an empty matrix is 0.
    pub fn new(rows: Vec<Vec<LineCount>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ViewError::RaggedMatrix {
                row,
                expected: width,
                found: r.len(),
            });
        }
        Ok(Self { rows, width })
    }

    /// Per-scene line counts of every character.
    pub fn by_character(scenes: &[Scene], n_characters: usize) -> Result<Self> {
        let mut rows = Vec::with_capacity(scenes.len());
        for scene in scenes {
            scene.check_against(n_characters)?;
            let mut row = vec![NOT_APPEARING; n_characters];
            // First entry wins when a character is listed twice.
            for (c, lines) in scene.appearances().collect::<Vec<_>>().into_iter().rev() {
                row[c] = lines;
            }
            rows.push(row);
        }
        Ok(Self {
            rows,
            width: n_characters,
        })
    }

    /// Folds a character matrix into an actor matrix.
    ///
    /// An actor's cell is the sum of the appearing cells of the characters
    /// cast to them, or [`NOT_APPEARING`] if none of them appears.
    pub fn by_actor(&self, characters: &[Character], n_actors: usize) -> Result<Self> {
        if characters.len() != self.width {
            return Err(ViewError::RaggedMatrix {
                row: 0,
                expected: characters.len(),
                found: self.width,
            });
        }
        if let Some(bad) = characters
            .iter()
            .filter_map(|c| c.actor_index)
            .find(|&a| a >= n_actors)
        {
            return Err(ViewError::IndexOutOfRange {
                what: "actor",
                index: bad,
                len: n_actors,
            });
        }

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut out = vec![NOT_APPEARING; n_actors];
                for (cell, character) in row.iter().zip(characters) {
                    if let (Some(actor), true) = (character.actor_index, *cell >= 0.0) {
                        let slot = &mut out[actor];
                        *slot = slot.max(0.0) + cell;
                    }
                }
                out
            })
            .collect();

        Ok(Self {
            rows,
            width: n_actors,
        })
    }

    /// Number of rows (scenes).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (entities).
    pub fn width(&self) -> usize {
        self.width
    }

    /// The row at `index`.
    pub fn row(&self, index: usize) -> Result<&[LineCount]> {
        self.rows
            .get(index)
            .map(Vec::as_slice)
            .ok_or(ViewError::IndexOutOfRange {
                what: "scene",
                index,
                len: self.rows.len(),
            })
    }

    /// Single cell, `None` if out of range.
    pub fn get(&self, row: usize, column: usize) -> Option<LineCount> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Whether the entity in `column` appears in `row`.
    pub fn appears(&self, row: usize, column: usize) -> bool {
        self.get(row, column).is_some_and(|v| v >= 0.0)
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<LineCount>] {
        &self.rows
    }
}

impl TryFrom<Vec<Vec<LineCount>>> for AppearanceMatrix {
    type Error = ViewError;

    fn try_from(rows: Vec<Vec<LineCount>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<AppearanceMatrix> for Vec<Vec<LineCount>> {
    fn from(m: AppearanceMatrix) -> Self {
        m.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scenes() -> Vec<Scene> {
        vec![
            Scene::new("S1").with_character(0, 3.0).with_character(1, 5.0),
            Scene::new("S2").with_character(2, 0.0),
        ]
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = AppearanceMatrix::new(vec![vec![1.0, 2.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            ViewError::RaggedMatrix {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_by_character_marks_absent() {
        let m = AppearanceMatrix::by_character(&sample_scenes(), 3).unwrap();
        assert_eq!(m.rows()[0], vec![3.0, 5.0, NOT_APPEARING]);
        assert_eq!(m.rows()[1], vec![NOT_APPEARING, NOT_APPEARING, 0.0]);
        assert!(m.appears(1, 2));
        assert!(!m.appears(1, 0));
    }

    #[test]
    fn test_by_actor_sums_and_keeps_zero() {
        // Actor 0 plays characters 0 and 1; actor 1 plays character 2; actor 2 plays nothing.
        let characters = vec![
            Character::new("A").played_by(0),
            Character::new("B").played_by(0),
            Character::new("C").played_by(1),
        ];
        let m = AppearanceMatrix::by_character(&sample_scenes(), 3)
            .unwrap()
            .by_actor(&characters, 3)
            .unwrap();
        assert_eq!(m.rows()[0], vec![8.0, NOT_APPEARING, NOT_APPEARING]);
        // Zero lines is an appearance, distinct from the sentinel.
        assert_eq!(m.rows()[1], vec![NOT_APPEARING, 0.0, NOT_APPEARING]);
    }

    #[test]
    fn test_by_actor_skips_uncast() {
        let characters = vec![
            Character::new("A"),
            Character::new("B").played_by(0),
            Character::new("C"),
        ];
        let m = AppearanceMatrix::by_character(&sample_scenes(), 3)
            .unwrap()
            .by_actor(&characters, 1)
            .unwrap();
        assert_eq!(m.rows(), &[vec![5.0], vec![NOT_APPEARING]]);
    }

    #[test]
    fn test_by_actor_rejects_bad_cast() {
        let characters = vec![
            Character::new("A").played_by(4),
            Character::new("B"),
            Character::new("C"),
        ];
        let m = AppearanceMatrix::by_character(&sample_scenes(), 3).unwrap();
        assert!(matches!(
            m.by_actor(&characters, 2),
            Err(ViewError::IndexOutOfRange { what: "actor", index: 4, .. })
        ));
    }

    #[test]
    fn test_row_out_of_range() {
        let m = AppearanceMatrix::by_character(&sample_scenes(), 3).unwrap();
        assert!(m.row(1).is_ok());
        assert!(m.row(2).is_err());
    }

    #[test]
    fn test_serde_rejects_ragged() {
        let ok: AppearanceMatrix = serde_json::from_str("[[1, -1], [0, 2]]").unwrap();
        assert_eq!(ok.width(), 2);
        assert!(serde_json::from_str::<AppearanceMatrix>("[[1, -1], [0]]").is_err());
    }
}
