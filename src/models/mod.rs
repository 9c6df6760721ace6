//! Rehearsal domain models.
//!
//! Plain data supplied by the host page. Nothing in the crate mutates
//! these values; every operation reads a snapshot and returns new data.
//!
//! # Index Conventions
//!
//! | Field | Refers to |
//! |-------|-----------|
//! | `Character::actor_index` | `ProductionData::actors` |
//! | `Scene::character_indices` | `ProductionData::characters` |
//! | `AttendanceSlot::attending` | `ProductionData::actors` |
//! | `Attendance::rehearsal` | `ProductionData::rehearsals` |

mod cast;
mod matrix;
mod production;
mod rehearsal;
mod scene;
mod time;

pub use cast::{cast_map, Actor, Character};
pub use matrix::{AppearanceMatrix, NOT_APPEARING};
pub use production::ProductionData;
pub use rehearsal::{Attendance, AttendanceKind, AttendanceSlot, Rehearsal};
pub use scene::{Appearance, LineCount, Lines, Scene, DEFAULT_LINES};
pub use time::{InvalidTime, TimeOfDay};
