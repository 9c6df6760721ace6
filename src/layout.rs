//! Stacked layout of time slots.
//!
//! Converts a column of `HH:MM` ranges into vertical pixel geometry.
//! Slots are stacked top to bottom strictly in input order: the first
//! starts at offset 0 and each next one starts where the previous ended.
//! Gaps and overlaps between the times are not detected.
//!
//! `height = (to - from) / 60 * px_per_hour`.

use serde::{Deserialize, Serialize};

use crate::config::{LayoutOptions, NegativeSpanPolicy};
use crate::error::{Result, ViewError};
use crate::models::{AttendanceSlot, TimeOfDay};

/// Anything with a `HH:MM` start and end.
pub trait TimeSpan {
    /// Start time text.
    fn from_time(&self) -> &str;
    /// End time text.
    fn to_time(&self) -> &str;
}

impl TimeSpan for AttendanceSlot {
    fn from_time(&self) -> &str {
        &self.from_time
    }

    fn to_time(&self) -> &str {
        &self.to_time
    }
}

impl<A: AsRef<str>, B: AsRef<str>> TimeSpan for (A, B) {
    fn from_time(&self) -> &str {
        self.0.as_ref()
    }

    fn to_time(&self) -> &str {
        self.1.as_ref()
    }
}

/// Position of one slot within its column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotGeometry {
    /// Distance from the top of the column (px).
    pub offset: f64,
    /// Slot height (px). Negative for a reversed range under
    /// [`NegativeSpanPolicy::PassThrough`].
    pub height: f64,
}

/// Geometry of a whole column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// One entry per input slot, in input order.
    pub per_slot: Vec<SlotGeometry>,
    /// Sum of all heights; the column's height.
    pub total_height: f64,
}

/// Lays out slot columns with fixed options.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    options: LayoutOptions,
}

impl LayoutEngine {
    /// Creates an engine.
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Lays out one column.
    ///
    /// # Errors
    /// [`ViewError::TimeParse`] for a malformed time, naming the slot and
    /// the raw text; [`ViewError::NegativeSpan`] for a reversed range when
    /// the policy is [`NegativeSpanPolicy::Reject`].
    pub fn layout<S: TimeSpan>(&self, slots: &[S]) -> Result<ColumnLayout> {
        let px_per_hour = self.options.px_per_hour;
        let mut per_slot = Vec::with_capacity(slots.len());
        let mut offset = 0.0;

        for (index, slot) in slots.iter().enumerate() {
            let from = parse_slot_time(index, slot.from_time())?;
            let to = parse_slot_time(index, slot.to_time())?;
            let minutes = from.minutes_until(to);

            if minutes < 0 {
                match self.options.negative_spans {
                    NegativeSpanPolicy::PassThrough => {
                        tracing::warn!(slot = index, from = %from, to = %to, "slot ends before it starts");
                    }
                    NegativeSpanPolicy::Reject => {
                        return Err(ViewError::NegativeSpan {
                            slot: index,
                            from: slot.from_time().to_string(),
                            to: slot.to_time().to_string(),
                        });
                    }
                }
            }

            let height = minutes as f64 / 60.0 * px_per_hour;
            per_slot.push(SlotGeometry { offset, height });
            offset += height;
        }

        tracing::trace!(slots = slots.len(), total_height = offset, "laid out column");
        Ok(ColumnLayout {
            per_slot,
            total_height: offset,
        })
    }
}

/// Lays out one column with default options and the given scale.
pub fn layout<S: TimeSpan>(slots: &[S], px_per_hour: f64) -> Result<ColumnLayout> {
    LayoutEngine::new(LayoutOptions::default().with_px_per_hour(px_per_hour)).layout(slots)
}

fn parse_slot_time(slot: usize, raw: &str) -> Result<TimeOfDay> {
    TimeOfDay::parse(raw).ok_or_else(|| {
        tracing::warn!(slot, raw, "malformed slot time");
        ViewError::TimeParse {
            slot,
            raw: raw.to_string(),
        }
    })
}
