//! Actor and character models.
//!
//! A character is a part in the play; an actor is the person who plays it.
//! Double casting is modelled as one character record per actor, so each
//! character refers to at most one actor.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of characters kept by [`short_label`] when no short name is set.
const SHORT_NAME_LEN: usize = 3;

/// A cast member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Actor {
    /// Full name.
    pub name: String,
    /// Abbreviation used in narrow table cells.
    #[serde(default)]
    pub short_name: String,
}

impl Actor {
    /// Creates an actor with no short name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: String::new(),
        }
    }

    /// Sets the short name.
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    /// Label for table headers: the short name, or the first three
    /// characters of the name.
    pub fn display_name(&self) -> String {
        short_label(&self.name, &self.short_name)
    }
}

/// A part in the play, optionally cast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Character {
    /// Role name.
    pub name: String,
    /// Abbreviation used in narrow table cells.
    #[serde(default)]
    pub short_name: String,
    /// Index of the actor playing this role. `None` = not cast yet.
    ///
    /// Serialized as an integer with `-1` for "not cast".
    #[serde(
        default,
        alias = "actr_idx",
        alias = "cast_idx",
        serialize_with = "serialize_actor_index",
        deserialize_with = "deserialize_actor_index"
    )]
    pub actor_index: Option<usize>,
}

impl Character {
    /// Creates an uncast character.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: String::new(),
            actor_index: None,
        }
    }

    /// Sets the short name.
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    /// Casts this character to the actor at `actor_index`.
    pub fn played_by(mut self, actor_index: usize) -> Self {
        self.actor_index = Some(actor_index);
        self
    }

    /// Whether an actor has been assigned.
    pub fn is_cast(&self) -> bool {
        self.actor_index.is_some()
    }

    /// Label for table headers.
    pub fn display_name(&self) -> String {
        short_label(&self.name, &self.short_name)
    }
}

/// Character → actor lookup table, indexed by character.
pub fn cast_map(characters: &[Character]) -> Vec<Option<usize>> {
    characters.iter().map(|c| c.actor_index).collect()
}

fn short_label(name: &str, short_name: &str) -> String {
    if short_name.is_empty() {
        name.chars().take(SHORT_NAME_LEN).collect()
    } else {
        short_name.to_string()
    }
}

fn serialize_actor_index<S: Serializer>(
    index: &Option<usize>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match index {
        Some(i) => serializer.serialize_u64(*i as u64),
        None => serializer.serialize_i64(-1),
    }
}

fn deserialize_actor_index<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<usize>, D::Error> {
    let raw = Option::<i64>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(i) if i < 0 => Ok(None),
        Some(i) => usize::try_from(i)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_short_name() {
        let a = Actor::new("Mitsuhashi").with_short_name("Mi");
        assert_eq!(a.display_name(), "Mi");
        assert_eq!(Actor::new("Mitsuhashi").display_name(), "Mit");
        assert_eq!(Actor::new("Al").display_name(), "Al");
    }

    #[test]
    fn test_display_name_counts_chars_not_bytes() {
        let c = Character::new("沙悟浄です");
        assert_eq!(c.display_name(), "沙悟浄");
    }

    #[test]
    fn test_character_casting() {
        let c = Character::new("Hamlet");
        assert!(!c.is_cast());
        let c = c.played_by(2);
        assert_eq!(c.actor_index, Some(2));
    }

    #[test]
    fn test_actor_index_serde_sentinel() {
        let json = r#"[
            {"name": "A", "actor_index": 0},
            {"name": "B", "actor_index": -1},
            {"name": "C"},
            {"name": "D", "actr_idx": 3}
        ]"#;
        let chars: Vec<Character> = serde_json::from_str(json).unwrap();
        assert_eq!(cast_map(&chars), vec![Some(0), None, None, Some(3)]);

        let out = serde_json::to_value(&chars[1]).unwrap();
        assert_eq!(out["actor_index"], -1);
    }
}
