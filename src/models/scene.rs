//! Scene model.
//!
//! A scene lists the characters who appear in it together with their
//! line counts. Line counts weight the attendance rate and the column
//! order of the appearance table.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewError};

/// A line count. Fractional when derived from an average.
pub type LineCount = f64;

/// Line count used for an automatic appearance when nothing in the
/// scene has an explicit count.
pub const DEFAULT_LINES: LineCount = 1.0;

/// How many lines a character has in a scene.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Lines {
    /// An explicit line count.
    Fixed(u32),
    /// Not counted; takes the average of the scene's explicit counts.
    Auto,
}

/// One character's appearance in a scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appearance {
    /// Character index.
    pub character: usize,
    /// Line count.
    pub lines: Lines,
}

impl Appearance {
    /// An appearance with an explicit line count.
    pub fn fixed(character: usize, lines: u32) -> Self {
        Self {
            character,
            lines: Lines::Fixed(lines),
        }
    }

    /// An appearance whose line count follows the scene average.
    pub fn auto(character: usize) -> Self {
        Self {
            character,
            lines: Lines::Auto,
        }
    }
}

/// A scene with its characters and their line counts.
///
/// `line_counts[i]` belongs to `character_indices[i]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    /// Scene name.
    pub name: String,
    /// Indices of the characters appearing in this scene.
    #[serde(alias = "chr_idxs")]
    pub character_indices: Vec<usize>,
    /// Line count of each appearing character.
    #[serde(alias = "lines_nums")]
    pub line_counts: Vec<LineCount>,
}

impl Scene {
    /// Creates a scene with no characters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            character_indices: Vec::new(),
            line_counts: Vec::new(),
        }
    }

    /// Adds a character with the given line count.
    pub fn with_character(mut self, character: usize, lines: LineCount) -> Self {
        self.character_indices.push(character);
        self.line_counts.push(lines);
        self
    }

    /// Builds a scene from appearances, resolving [`Lines::Auto`].
    ///
    /// Automatic counts take the mean of the explicit counts in the same
    /// scene, or [`DEFAULT_LINES`] if there are none.
    pub fn from_appearances(name: impl Into<String>, appearances: &[Appearance]) -> Self {
        let fixed: Vec<u32> = appearances
            .iter()
            .filter_map(|a| match a.lines {
                Lines::Fixed(n) => Some(n),
                Lines::Auto => None,
            })
            .collect();
        let average = if fixed.is_empty() {
            DEFAULT_LINES
        } else {
            fixed.iter().map(|&n| f64::from(n)).sum::<f64>() / fixed.len() as f64
        };

        let mut scene = Self::new(name);
        for a in appearances {
            let lines = match a.lines {
                Lines::Fixed(n) => f64::from(n),
                Lines::Auto => average,
            };
            scene = scene.with_character(a.character, lines);
        }
        scene
    }

    /// Number of appearing characters.
    pub fn character_count(&self) -> usize {
        self.character_indices.len()
    }

    /// Sum of all line counts.
    pub fn total_lines(&self) -> LineCount {
        self.line_counts.iter().sum()
    }

    /// Line count of `character` in this scene, if it appears.
    ///
    /// If a character is listed twice, the first entry is returned.
    pub fn lines_of(&self, character: usize) -> Option<LineCount> {
        self.character_indices
            .iter()
            .position(|&c| c == character)
            .and_then(|i| self.line_counts.get(i).copied())
    }

    /// Iterates `(character, lines)` pairs.
    pub fn appearances(&self) -> impl Iterator<Item = (usize, LineCount)> + '_ {
        self.character_indices
            .iter()
            .copied()
            .zip(self.line_counts.iter().copied())
    }

    /// Checks that the parallel arrays have equal length.
    pub fn check_shape(&self) -> Result<()> {
        if self.character_indices.len() != self.line_counts.len() {
            return Err(ViewError::RaggedScene {
                scene: self.name.clone(),
                characters: self.character_indices.len(),
                line_counts: self.line_counts.len(),
            });
        }
        Ok(())
    }

    /// Checks the shape and that every character index is below `n_characters`.
    pub fn check_against(&self, n_characters: usize) -> Result<()> {
        self.check_shape()?;
        if let Some(&bad) = self.character_indices.iter().find(|&&c| c >= n_characters) {
            return Err(ViewError::IndexOutOfRange {
                what: "character",
                index: bad,
                len: n_characters,
            });
        }
        Ok(())
    }

    /// Distinct actors of this scene in first-appearance order.
    ///
    /// Uncast characters are skipped. `cast[c]` is the actor of character `c`.
    pub fn actor_indices(&self, cast: &[Option<usize>]) -> Result<Vec<usize>> {
        let mut actors = Vec::new();
        for &c in &self.character_indices {
            let actor = *cast.get(c).ok_or(ViewError::IndexOutOfRange {
                what: "character",
                index: c,
                len: cast.len(),
            })?;
            if let Some(a) = actor {
                if !actors.contains(&a) {
                    actors.push(a);
                }
            }
        }
        Ok(actors)
    }
}
