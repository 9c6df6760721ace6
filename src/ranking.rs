//! Frequency ranking of entities.
//!
//! Orders entities so that the one with the largest weight comes first.
//! Used for the column order of the appearance table (weights = the
//! selected scene's row) and the row order of the attendance table
//! (weights = each actor's lines in the selected scene).
//!
//! # Algorithm
//! Selection by repeated maximum: pick the first position holding the
//! largest remaining weight, emit its index, remove it, repeat. Removal
//! keeps the remainder in input order, so ties resolve to the earliest
//! index. O(n²), for casts of tens of entities.
//!
//! The appearance sentinel `-1` needs no special case: it is below every
//! real count. `NaN` ranks below everything, `-1` included.

use crate::error::Result;
use crate::models::{AppearanceMatrix, LineCount, Scene};

/// Display order for `weights`: a permutation of `0..weights.len()`,
/// heaviest first, earliest index first among equals.
pub fn rank(weights: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..weights.len()).collect();
    let mut remaining: Vec<f64> = weights.to_vec();
    let mut order = Vec::with_capacity(weights.len());

    while !remaining.is_empty() {
        let mut best = 0;
        for (pos, &w) in remaining.iter().enumerate().skip(1) {
            if outranks(w, remaining[best]) {
                best = pos;
            }
        }
        order.push(indices.remove(best));
        remaining.remove(best);
    }

    order
}

/// Whether `a` strictly outranks `b`.
#[inline]
fn outranks(a: f64, b: f64) -> bool {
    a > b || (b.is_nan() && !a.is_nan())
}

/// The order `0..n`, used when nothing is selected.
pub fn identity_order(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Column order of an appearance table.
///
/// With no selected scene the columns keep their natural order and the
/// ranker is not consulted.
pub fn order_for(selected_scene: Option<usize>, matrix: &AppearanceMatrix) -> Result<Vec<usize>> {
    match selected_scene {
        None => Ok(identity_order(matrix.width())),
        Some(scene) => Ok(rank(matrix.row(scene)?)),
    }
}

/// Actors who appear in `scene`, most lines first.
///
/// Only cast characters count: an actor's weight is the sum of the line
/// counts of the characters they play in this scene. Actors keep their
/// first-appearance order among equals. `cast[c]` is the actor of
/// character `c`.
pub fn scene_cast_order(scene: &Scene, cast: &[Option<usize>]) -> Result<Vec<usize>> {
    scene.check_against(cast.len())?;

    let mut actors: Vec<usize> = Vec::new();
    let mut lines: Vec<LineCount> = Vec::new();
    for (character, n) in scene.appearances() {
        let Some(actor) = cast[character] else {
            continue;
        };
        match actors.iter().position(|&a| a == actor) {
            Some(pos) => lines[pos] += n,
            None => {
                actors.push(actor);
                lines.push(n);
            }
        }
    }

    let order = rank(&lines).into_iter().map(|i| actors[i]).collect();
    tracing::debug!(scene = %scene.name, ?order, "ranked scene cast");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NOT_APPEARING;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_rank_descending() {
        assert_eq!(rank(&[3.0, 1.0, 2.0]), vec![0, 2, 1]);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        assert_eq!(rank(&[5.0, 5.0, 1.0]), vec![0, 1, 2]);
        assert_eq!(rank(&[1.0, 2.0, 2.0, 2.0]), vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn test_rank_sentinel_last() {
        assert_eq!(rank(&[-1.0, 2.0, -1.0]), vec![1, 0, 2]);
        // Zero lines still beats not appearing.
        assert_eq!(rank(&[NOT_APPEARING, 0.0]), vec![1, 0]);
    }

    #[test]
    fn test_rank_nan_last() {
        assert_eq!(rank(&[f64::NAN, -1.0, 3.0]), vec![2, 1, 0]);
    }

    #[test]
    fn test_rank_random_is_stable_descending_permutation() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let n = rng.random_range(0..30);
            let weights: Vec<f64> = (0..n).map(|_| rng.random_range(-1..6) as f64).collect();
            let order = rank(&weights);

            let mut seen = order.clone();
            seen.sort_unstable();
            assert_eq!(seen, identity_order(n));

            for pair in order.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert!(weights[a] >= weights[b]);
                if weights[a] == weights[b] {
                    assert!(a < b, "tie between {a} and {b} out of order");
                }
            }
            assert_eq!(rank(&weights), order);
        }
    }

    #[test]
    fn test_order_for_without_selection() {
        let m = AppearanceMatrix::new(vec![vec![1.0, 9.0, 4.0]]).unwrap();
        assert_eq!(order_for(None, &m).unwrap(), vec![0, 1, 2]);
        assert_eq!(order_for(Some(0), &m).unwrap(), vec![1, 2, 0]);
        assert!(order_for(Some(1), &m).is_err());
    }

    #[test]
    fn test_scene_cast_order_sums_lines() {
        // Actor 1 plays chars 0 and 2 (2 + 3 = 5); actor 0 plays char 1 (4); char 3 uncast.
        let cast = vec![Some(1), Some(0), Some(1), None];
        let scene = Scene::new("S")
            .with_character(0, 2.0)
            .with_character(1, 4.0)
            .with_character(2, 3.0)
            .with_character(3, 99.0);
        assert_eq!(scene_cast_order(&scene, &cast).unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_scene_cast_order_ties_first_appearance() {
        let cast = vec![Some(2), Some(0)];
        let scene = Scene::new("S").with_character(0, 1.0).with_character(1, 1.0);
        assert_eq!(scene_cast_order(&scene, &cast).unwrap(), vec![2, 0]);
    }

    #[test]
    fn test_scene_cast_order_bad_character() {
        let scene = Scene::new("S").with_character(3, 1.0);
        assert!(scene_cast_order(&scene, &[None]).is_err());
    }
}
