//! Per-slot attendance rates.
//!
//! For each slot, counts how much of a scene could be rehearsed with the
//! actors present, under one [`MetricMode`].
//!
//! # Metrics
//!
//! | Mode | Attendees | Total |
//! |------|-----------|-------|
//! | ByCharacters | scene characters whose actor is present | scene characters |
//! | ByActors | actors present in the slot | distinct cast actors of the scene |
//! | ByLines | lines of present characters | all lines of the scene |
//!
//! A zero total yields rate 0, e.g. for a scene nobody is cast in.

use serde::{Deserialize, Serialize};

use super::MetricMode;
use crate::error::Result;
use crate::models::{AttendanceSlot, Scene};

/// Attendance of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRate {
    /// Numerator under the chosen metric.
    pub attendee_count: f64,
    /// Denominator under the chosen metric.
    pub total_count: f64,
    /// `attendee_count / total_count`, or 0 when the total is 0.
    pub rate: f64,
}

impl AttendanceRate {
    /// Builds a rate from its counts.
    pub fn new(attendee_count: f64, total_count: f64) -> Self {
        let rate = if total_count > 0.0 {
            attendee_count / total_count
        } else {
            0.0
        };
        Self {
            attendee_count,
            total_count,
            rate,
        }
    }

    /// `attendees/total` caption.
    pub fn label(&self) -> String {
        format!("{}/{}", self.attendee_count, self.total_count)
    }
}

/// Rates of `scene` for every slot, in slot order.
///
/// `cast[c]` is the actor of character `c`; `None` = not cast.
pub fn compute(
    scene: &Scene,
    slots: &[AttendanceSlot],
    cast: &[Option<usize>],
    mode: MetricMode,
) -> Result<Vec<AttendanceRate>> {
    scene.check_against(cast.len())?;
    tracing::debug!(scene = %scene.name, slots = slots.len(), %mode, "computing attendance");

    // Scene-wide totals do not depend on the slot.
    let total = match mode {
        MetricMode::ByCharacters => scene.character_count() as f64,
        MetricMode::ByActors => scene.actor_indices(cast)?.len() as f64,
        MetricMode::ByLines => scene.total_lines(),
    };

    let rates = slots
        .iter()
        .map(|slot| {
            let present = scene
                .appearances()
                .filter(|&(c, _)| cast[c].is_some_and(|a| slot.is_attending(a)));
            let attendees = match mode {
                MetricMode::ByCharacters => present.count() as f64,
                MetricMode::ByActors => slot.attending.len() as f64,
                MetricMode::ByLines => present.map(|(_, n)| n).sum(),
            };
            AttendanceRate::new(attendees, total)
        })
        .collect();

    Ok(rates)
}
