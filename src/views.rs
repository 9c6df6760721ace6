//! View models.
//!
//! Applies a [`ViewConfiguration`] to a [`ProductionData`] snapshot and
//! returns what a page needs to draw: which rows are visible, in which
//! order the columns go, and the per-cell numbers. No markup is produced.
//!
//! | View | Function |
//! |------|----------|
//! | Appearance table | [`appearance_view`] |
//! | Attendance table | [`attendance_table`], row order [`attendance_table_order`] |
//! | Attendance graph of one rehearsal | [`attendance_graph`] |
//! | Rehearsal possibility (every rehearsal) | [`possibility_grid`] |

use serde::Serialize;

use crate::attendance::{color_for_rate, compute, AttendanceRate, Rgb};
use crate::config::ViewConfiguration;
use crate::error::{Result, ViewError};
use crate::layout::{LayoutEngine, SlotGeometry};
use crate::models::{AppearanceMatrix, AttendanceKind, AttendanceSlot, ProductionData, TimeOfDay};
use crate::ranking::{identity_order, order_for, scene_cast_order};
use crate::timeline::scene_slots;

/// Appearance table: scenes × characters (or actors).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppearanceView {
    /// Indices of the scenes that pass the keyword filter, in play order.
    pub rows: Vec<usize>,
    /// Entity indices in display order.
    pub columns: Vec<usize>,
    /// Header labels, parallel to `columns`.
    pub headers: Vec<String>,
    /// Line counts by scene and entity (unordered).
    pub matrix: AppearanceMatrix,
}

/// Builds the appearance table.
///
/// Columns are characters, or actors when `config.by_actor` is set. With a
/// selected scene, columns are ranked by that scene's line counts.
pub fn appearance_view(data: &ProductionData, config: &ViewConfiguration) -> Result<AppearanceView> {
    let rows = config.filter().select(&data.scene_names());
    let (matrix, labels): (AppearanceMatrix, Vec<String>) = if config.by_actor {
        (
            data.actor_matrix()?,
            data.actors.iter().map(|a| a.display_name()).collect(),
        )
    } else {
        (
            data.character_matrix()?,
            data.characters.iter().map(|c| c.display_name()).collect(),
        )
    };
    let columns = order_for(config.selected_scene, &matrix)?;
    let headers = columns.iter().map(|&i| labels[i].clone()).collect();

    tracing::debug!(
        rows = rows.len(),
        columns = columns.len(),
        selected = ?config.selected_scene,
        by_actor = config.by_actor,
        "built appearance view"
    );
    Ok(AppearanceView {
        rows,
        columns,
        headers,
        matrix,
    })
}

/// Attendance table: actors × rehearsals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceTable {
    /// Actor indices in display order.
    pub rows: Vec<usize>,
    /// `cells[k][r]` = codes of actor `rows[k]` at rehearsal `r`.
    ///
    /// Codes are `*` (all day), `-` (absent) or `HH:MM-HH:MM`, sorted by
    /// start time. Empty when there is no record.
    pub cells: Vec<Vec<Vec<String>>>,
}

/// Actor row order of the attendance table.
///
/// Without a selected scene every actor is listed in natural order. With
/// one, only the scene's cast is listed, most lines first.
pub fn attendance_table_order(data: &ProductionData, config: &ViewConfiguration) -> Result<Vec<usize>> {
    match config.selected_scene {
        None => Ok(identity_order(data.actors.len())),
        Some(s) => {
            let scene = data.scenes.get(s).ok_or(ViewError::IndexOutOfRange {
                what: "scene",
                index: s,
                len: data.scenes.len(),
            })?;
            scene_cast_order(scene, &data.cast())
        }
    }
}

/// Builds the attendance table, rows ordered by [`attendance_table_order`].
pub fn attendance_table(data: &ProductionData, config: &ViewConfiguration) -> Result<AttendanceTable> {
    let rows = attendance_table_order(data, config)?;

    let cells = rows
        .iter()
        .map(|&actor| {
            (0..data.rehearsals.len())
                .map(|r| attendance_codes(data, r, actor))
                .collect()
        })
        .collect();

    Ok(AttendanceTable { rows, cells })
}

fn attendance_codes(data: &ProductionData, rehearsal: usize, actor: usize) -> Vec<String> {
    let mut records: Vec<&AttendanceKind> = data
        .attendances_for(rehearsal)
        .filter(|a| a.actor == actor)
        .map(|a| &a.kind)
        .collect();
    records.sort_by_key(|k| start_of(k));
    records.iter().map(|k| k.to_string()).collect()
}

fn start_of(kind: &AttendanceKind) -> Option<TimeOfDay> {
    match kind {
        AttendanceKind::Partial { from, .. } => Some(*from),
        _ => None,
    }
}

/// One slot of an attendance-graph column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotCell {
    /// The slot and who attends it.
    pub slot: AttendanceSlot,
    /// Attendance under the configured metric.
    pub rate: AttendanceRate,
    /// Fill colour for `rate`.
    pub color: Rgb,
    /// Position within the column.
    pub geometry: SlotGeometry,
}

/// One scene's column of an attendance graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneColumn {
    /// Scene index.
    pub scene: usize,
    /// Slots, top to bottom.
    pub cells: Vec<SlotCell>,
    /// Column height (px).
    pub height: f64,
}

/// Builds the attendance graph of one rehearsal: a column per visible scene.
pub fn attendance_graph(
    data: &ProductionData,
    config: &ViewConfiguration,
    rehearsal: usize,
) -> Result<Vec<SceneColumn>> {
    let cast = data.cast();
    let engine = LayoutEngine::new(config.layout.clone());
    let visible = config.filter().select(&data.scene_names());

    let mut columns = Vec::with_capacity(visible.len());
    for scene_index in visible {
        let scene = &data.scenes[scene_index];
        let slots = scene_slots(data, rehearsal, scene_index)?;
        let rates = compute(scene, &slots, &cast, config.metric)?;
        let layout = engine.layout(&slots)?;

        let cells = slots
            .into_iter()
            .zip(rates)
            .zip(layout.per_slot)
            .map(|((slot, rate), geometry)| SlotCell {
                slot,
                color: color_for_rate(rate.rate),
                rate,
                geometry,
            })
            .collect();

        columns.push(SceneColumn {
            scene: scene_index,
            cells,
            height: layout.total_height,
        });
    }

    tracing::debug!(rehearsal, columns = columns.len(), metric = %config.metric, "built attendance graph");
    Ok(columns)
}

/// Attendance graphs of every rehearsal, in rehearsal order.
pub fn possibility_grid(
    data: &ProductionData,
    config: &ViewConfiguration,
) -> Result<Vec<Vec<SceneColumn>>> {
    (0..data.rehearsals.len())
        .map(|r| attendance_graph(data, config, r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::MetricMode;
    use crate::models::{Actor, Attendance, Character, Rehearsal, Scene};

    /// Two actors, three characters (the third uncast), two scenes, one rehearsal.
    fn sample_data() -> ProductionData {
        ProductionData::new()
            .with_actor(Actor::new("Mitsuhashi").with_short_name("Mi"))
            .with_actor(Actor::new("Tanaka"))
            .with_character(Character::new("Sha Wujing").played_by(0))
            .with_character(Character::new("Sun Wukong").played_by(1))
            .with_character(Character::new("Narrator"))
            .with_scene(
                Scene::new("Act1 river")
                    .with_character(0, 3.0)
                    .with_character(1, 5.0),
            )
            .with_scene(
                Scene::new("Act1 temple (cut)")
                    .with_character(2, 9.0)
                    .with_character(0, 1.0),
            )
            .with_rehearsal(Rehearsal::new(
                "2019-08-30",
                "Hall",
                TimeOfDay::new(18, 0),
                TimeOfDay::new(21, 0),
            ))
            .with_attendance(Attendance::all_day(0, 0))
            .with_attendance(Attendance::partial(
                0,
                1,
                TimeOfDay::new(19, 0),
                TimeOfDay::new(20, 0),
            ))
    }

    #[test]
    fn test_appearance_view_defaults() {
        let view = appearance_view(&sample_data(), &ViewConfiguration::new()).unwrap();
        assert_eq!(view.rows, vec![0, 1]);
        assert_eq!(view.columns, vec![0, 1, 2]);
        assert_eq!(view.headers, vec!["Sha", "Sun", "Nar"]);
    }

    #[test]
    fn test_appearance_view_filter_and_rank() {
        let config = ViewConfiguration::new()
            .with_keyword("Act1 -cut")
            .with_selected_scene(1);
        let view = appearance_view(&sample_data(), &config).unwrap();
        assert_eq!(view.rows, vec![0]);
        // Scene 1: Narrator 9, Sha 1, Sun absent.
        assert_eq!(view.columns, vec![2, 0, 1]);
    }

    #[test]
    fn test_appearance_view_by_actor() {
        let config = ViewConfiguration::new()
            .with_by_actor(true)
            .with_selected_scene(0);
        let view = appearance_view(&sample_data(), &config).unwrap();
        assert_eq!(view.columns, vec![1, 0]);
        assert_eq!(view.headers, vec!["Tan", "Mi"]);
        assert_eq!(view.matrix.rows()[1], vec![1.0, -1.0]);
    }

    #[test]
    fn test_appearance_view_bad_selection() {
        let config = ViewConfiguration::new().with_selected_scene(5);
        assert!(matches!(
            appearance_view(&sample_data(), &config),
            Err(ViewError::IndexOutOfRange { what: "scene", .. })
        ));
    }

    #[test]
    fn test_attendance_table() {
        let data = sample_data().with_attendance(Attendance::partial(
            0,
            1,
            TimeOfDay::new(20, 30),
            TimeOfDay::new(21, 0),
        ));
        let table = attendance_table(&data, &ViewConfiguration::new()).unwrap();
        assert_eq!(table.rows, vec![0, 1]);
        assert_eq!(table.cells[0], vec![vec!["*".to_string()]]);
        assert_eq!(
            table.cells[1],
            vec![vec!["19:00-20:00".to_string(), "20:30-21:00".to_string()]]
        );

        // Scene 0: Tanaka has 5 lines, Mitsuhashi 3.
        let table = attendance_table(&data, &ViewConfiguration::new().with_selected_scene(0)).unwrap();
        assert_eq!(table.rows, vec![1, 0]);
        assert_eq!(table.cells[1][0], vec!["*".to_string()]);
    }

    #[test]
    fn test_attendance_table_order() {
        let data = sample_data();
        let order = |config: ViewConfiguration| attendance_table_order(&data, &config);
        assert_eq!(order(ViewConfiguration::new()).unwrap(), vec![0, 1]);
        assert_eq!(order(ViewConfiguration::new().with_selected_scene(0)).unwrap(), vec![1, 0]);
        // Scene 1: only Mitsuhashi is cast.
        assert_eq!(order(ViewConfiguration::new().with_selected_scene(1)).unwrap(), vec![0]);
        assert!(order(ViewConfiguration::new().with_selected_scene(2)).is_err());
    }

    #[test]
    fn test_attendance_graph_by_characters() {
        let config = ViewConfiguration::new().with_keyword("river");
        let columns = attendance_graph(&sample_data(), &config, 0).unwrap();
        assert_eq!(columns.len(), 1);
        let col = &columns[0];
        assert_eq!(col.scene, 0);
        assert_eq!(col.height, 180.0);

        let labels: Vec<String> = col.cells.iter().map(|c| c.rate.label()).collect();
        assert_eq!(labels, vec!["1/2", "2/2", "1/2"]);
        let offsets: Vec<f64> = col.cells.iter().map(|c| c.geometry.offset).collect();
        assert_eq!(offsets, vec![0.0, 60.0, 120.0]);
        assert_eq!(col.cells[1].color.r, 112.0);
    }

    #[test]
    fn test_attendance_graph_by_lines() {
        let config = ViewConfiguration::new()
            .with_keyword("river")
            .with_metric(MetricMode::ByLines);
        let columns = attendance_graph(&sample_data(), &config, 0).unwrap();
        let labels: Vec<String> = columns[0].cells.iter().map(|c| c.rate.label()).collect();
        assert_eq!(labels, vec!["3/8", "8/8", "3/8"]);
    }

    #[test]
    fn test_possibility_grid() {
        let data = sample_data().with_rehearsal(Rehearsal::new(
            "2019-08-31",
            "Studio",
            TimeOfDay::new(13, 0),
            TimeOfDay::new(14, 0),
        ));
        let grid = possibility_grid(&data, &ViewConfiguration::new()).unwrap();
        assert_eq!(grid.len(), 2);
        // Nobody registered for the second rehearsal: one empty slot per scene.
        assert!(grid[1].iter().all(|c| c.cells.len() == 1 && c.cells[0].rate.rate == 0.0));
    }

    #[test]
    fn test_views_idempotent() {
        let data = sample_data();
        let config = ViewConfiguration::new().with_selected_scene(0);
        assert_eq!(
            appearance_view(&data, &config).unwrap(),
            appearance_view(&data, &config).unwrap()
        );
        assert_eq!(
            attendance_graph(&data, &config, 0).unwrap(),
            attendance_graph(&data, &config, 0).unwrap()
        );
    }
}
