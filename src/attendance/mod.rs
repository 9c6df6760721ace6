//! Attendance rates and their fill colours.
//!
//! # Usage
//!
//! ```
//! use rehearsal_views::attendance::{color_for_rate, compute, MetricMode};
//! use rehearsal_views::models::{AttendanceSlot, Scene};
//!
//! let scene = Scene::new("S1").with_character(0, 3.0).with_character(1, 5.0);
//! let cast = vec![Some(0), Some(1)];
//! let slots = vec![AttendanceSlot::new("13:00", "14:00").with_attending([0])];
//!
//! let rates = compute(&scene, &slots, &cast, MetricMode::ByLines).unwrap();
//! assert_eq!(rates[0].rate, 0.375);
//! let fill = color_for_rate(rates[0].rate);
//! assert_eq!(fill.g, 240.0);
//! ```

mod color;
mod metric;
mod rate;

pub use color::{color_for_rate, Rgb};
pub use metric::MetricMode;
pub use rate::{compute, AttendanceRate};
