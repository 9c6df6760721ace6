//! Production snapshot.
//!
//! Everything a view needs, as the host page embeds it. Indices in one
//! collection refer to positions in another: `Character::actor_index`
//! into `actors`, `Scene::character_indices` into `characters`, and
//! `Attendance::{rehearsal, actor}` into `rehearsals` and `actors`.

use serde::{Deserialize, Serialize};

use super::{cast_map, Actor, AppearanceMatrix, Attendance, Character, Rehearsal, Scene};
use crate::error::Result;

/// Read-only data of one production.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductionData {
    /// Cast members.
    #[serde(default)]
    pub actors: Vec<Actor>,
    /// Roles.
    #[serde(default)]
    pub characters: Vec<Character>,
    /// Scenes in play order.
    #[serde(default)]
    pub scenes: Vec<Scene>,
    /// Rehearsal sessions.
    #[serde(default)]
    pub rehearsals: Vec<Rehearsal>,
    /// Attendance records across all rehearsals.
    #[serde(default)]
    pub attendances: Vec<Attendance>,
}

impl ProductionData {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an actor.
    pub fn with_actor(mut self, actor: Actor) -> Self {
        self.actors.push(actor);
        self
    }

    /// Adds a character.
    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.push(character);
        self
    }

    /// Adds a scene.
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scenes.push(scene);
        self
    }

    /// Adds a rehearsal.
    pub fn with_rehearsal(mut self, rehearsal: Rehearsal) -> Self {
        self.rehearsals.push(rehearsal);
        self
    }

    /// Adds an attendance record.
    pub fn with_attendance(mut self, attendance: Attendance) -> Self {
        self.attendances.push(attendance);
        self
    }

    /// Character → actor lookup.
    pub fn cast(&self) -> Vec<Option<usize>> {
        cast_map(&self.characters)
    }

    /// Scene names in order.
    pub fn scene_names(&self) -> Vec<&str> {
        self.scenes.iter().map(|s| s.name.as_str()).collect()
    }

    /// Appearance matrix by character.
    pub fn character_matrix(&self) -> Result<AppearanceMatrix> {
        AppearanceMatrix::by_character(&self.scenes, self.characters.len())
    }

    /// Appearance matrix by actor.
    pub fn actor_matrix(&self) -> Result<AppearanceMatrix> {
        self.character_matrix()?
            .by_actor(&self.characters, self.actors.len())
    }

    /// Attendance records of the rehearsal at `rehearsal`.
    pub fn attendances_for(&self, rehearsal: usize) -> impl Iterator<Item = &Attendance> + '_ {
        self.attendances
            .iter()
            .filter(move |a| a.rehearsal == rehearsal)
    }
}
