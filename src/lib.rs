//! View core for rehearsal scheduling.
//!
//! Turns a snapshot of a theatre production (actors, characters, scenes,
//! rehearsals and attendance registrations) into the numbers the
//! scheduling pages draw: filtered scene lists, ranked appearance tables,
//! per-slot attendance rates with their fill colours, and stacked
//! time-slot geometry. Rendering and persistence stay with the host.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Actor`, `Character`, `Scene`, `Rehearsal`,
//!   `Attendance`, `AttendanceSlot`, `AppearanceMatrix`, `ProductionData`
//! - **`filter`**: Keyword filter over scene names (`-term` excludes)
//! - **`ranking`**: Heaviest-first entity ordering for a selected scene
//! - **`attendance`**: Attendance rate per slot under three metrics, rate → colour
//! - **`timeline`**: Attendance slots of a scene derived from registrations
//! - **`layout`**: `HH:MM` slot columns → pixel offsets and heights
//! - **`views`**: One call per page view, driven by a `ViewConfiguration`
//! - **`config`**: View controls and layout options
//! - **`validation`**: Snapshot integrity checks reporting every problem
//! - **`error`**: `ViewError` and the crate `Result`
//!
//! # Usage
//!
//! ```
//! use rehearsal_views::config::ViewConfiguration;
//! use rehearsal_views::models::{Actor, Character, ProductionData, Scene};
//! use rehearsal_views::views::appearance_view;
//!
//! let data = ProductionData::new()
//!     .with_actor(Actor::new("Mitsuhashi"))
//!     .with_character(Character::new("Sha Wujing").played_by(0))
//!     .with_character(Character::new("Narrator"))
//!     .with_scene(Scene::new("Act1").with_character(0, 2.0).with_character(1, 7.0));
//!
//! let config = ViewConfiguration::new().with_selected_scene(0);
//! let view = appearance_view(&data, &config).unwrap();
//! assert_eq!(view.columns, vec![1, 0]);
//! ```
//!
//! All operations are pure functions of their inputs. Identical inputs
//! give identical outputs; nothing is cached between calls.

pub mod attendance;
pub mod config;
pub mod error;
pub mod filter;
pub mod layout;
pub mod models;
pub mod ranking;
pub mod timeline;
pub mod validation;
pub mod views;

pub use error::{Result, ViewError};
