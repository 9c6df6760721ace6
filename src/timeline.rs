//! Attendance slots of a scene within one rehearsal.
//!
//! Each attendance record contributes an `in` and an `out` border, clamped
//! into the rehearsal's session. Sweeping the borders in time order
//! splits the session into slots with a constant set of present actors.
//! Only the actors of the scene are considered, so each scene gets its
//! own slot boundaries.
//!
//! # Algorithm
//! 1. Collect borders of the scene's actors, skipping absences.
//! 2. Stable-sort by time; an actor's `in` stays before their `out`.
//! 3. From the session start, close a slot whenever a border lies past
//!    the cursor, then apply the border.
//! 4. Close a final slot up to the session end if time remains.

use std::collections::BTreeSet;

use crate::error::{Result, ViewError};
use crate::models::{Attendance, AttendanceSlot, ProductionData, Rehearsal, TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    In,
    Out,
}

#[derive(Debug, Clone, Copy)]
struct Border {
    time: TimeOfDay,
    actor: usize,
    movement: Move,
}

/// Slots of `rehearsal` for a scene played by `scene_actors`.
///
/// Records of other actors are ignored. The slots cover the session from
/// its start to its end without gaps.
pub fn derive_slots<'a>(
    rehearsal: &Rehearsal,
    attendances: impl IntoIterator<Item = &'a Attendance>,
    scene_actors: &[usize],
) -> Vec<AttendanceSlot> {
    let mut borders: Vec<Border> = Vec::new();
    for record in attendances {
        if !scene_actors.contains(&record.actor) {
            continue;
        }
        if let Some((from, to)) = record.interval_within(rehearsal) {
            borders.push(Border {
                time: from,
                actor: record.actor,
                movement: Move::In,
            });
            borders.push(Border {
                time: to,
                actor: record.actor,
                movement: Move::Out,
            });
        }
    }
    borders.sort_by_key(|b| b.time);

    let mut slots = Vec::new();
    let mut cursor = rehearsal.start_time;
    let mut present: BTreeSet<usize> = BTreeSet::new();

    for border in &borders {
        if border.time > cursor {
            slots.push(
                AttendanceSlot::between(cursor, border.time).with_attending(present.iter().copied()),
            );
            cursor = border.time;
        }
        match border.movement {
            Move::In => {
                present.insert(border.actor);
            }
            Move::Out => {
                present.remove(&border.actor);
            }
        }
    }

    if rehearsal.end_time > cursor {
        slots.push(
            AttendanceSlot::between(cursor, rehearsal.end_time)
                .with_attending(present.iter().copied()),
        );
    }

    tracing::trace!(borders = borders.len(), slots = slots.len(), "derived slots");
    slots
}

/// Slots of one scene in one rehearsal of `data`.
pub fn scene_slots(
    data: &ProductionData,
    rehearsal: usize,
    scene: usize,
) -> Result<Vec<AttendanceSlot>> {
    let session = data.rehearsals.get(rehearsal).ok_or(ViewError::IndexOutOfRange {
        what: "rehearsal",
        index: rehearsal,
        len: data.rehearsals.len(),
    })?;
    let scene = data.scenes.get(scene).ok_or(ViewError::IndexOutOfRange {
        what: "scene",
        index: scene,
        len: data.scenes.len(),
    })?;
    let actors = scene.actor_indices(&data.cast())?;
    Ok(derive_slots(session, data.attendances_for(rehearsal), &actors))
}
