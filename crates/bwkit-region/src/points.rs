//! Labeling of sparse coordinate sets
//!
//! When foreground is given as a list of integer coordinates instead of a
//! dense array, components are found with a [`KeyedDisjointSet`] keyed by
//! the coordinates themselves. No bounding array is ever allocated, so
//! coordinates may be negative or far apart.

use crate::connectivity::Connectivity;
use crate::error::{RegionError, RegionResult};
use crate::union_find::KeyedDisjointSet;

/// Result of [`label_points`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointLabeling {
    /// Label of each input point, in input order
    pub labels: Vec<u32>,
    /// Number of components
    pub count: u32,
}

/// Label a set of integer coordinates
///
/// Labels are numbered in order of first appearance in `points`; repeated
/// points share a label.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if the points disagree on
/// their number of coordinates and [`RegionError::DimensionMismatch`] if
/// the connectivity cannot be broadcast to them.
pub fn label_points<P: AsRef<[i64]>>(
    points: &[P],
    connectivity: &Connectivity,
) -> RegionResult<PointLabeling> {
    let Some(first) = points.first() else {
        return Ok(PointLabeling {
            labels: Vec::new(),
            count: 0,
        });
    };
    let ndim = first.as_ref().len();
    let conn = connectivity.broadcast_to(ndim)?;

    let mut sets = KeyedDisjointSet::new();
    let mut ids = Vec::with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        let point = point.as_ref();
        if point.len() != ndim {
            return Err(RegionError::InvalidParameters(format!(
                "point {i} has {} coordinates, expected {ndim}",
                point.len()
            )));
        }
        ids.push(sets.insert(point.to_vec()));
    }

    let deltas = conn.causal_deltas();
    for id in 0..sets.len() {
        for delta in &deltas {
            let neighbour: Option<Vec<i64>> = sets.keys()[id]
                .iter()
                .zip(delta)
                .map(|(&c, &d)| c.checked_add(d as i64))
                .collect();
            if let Some(other) = neighbour.and_then(|key| sets.id_of(&key)) {
                sets.union_ids(id, other);
            }
        }
    }

    let mut final_label = vec![0u32; sets.len()];
    let mut count = 0u32;
    let mut labels = Vec::with_capacity(ids.len());
    for id in ids {
        let root = sets.find_id(id);
        if final_label[root] == 0 {
            count = count
                .checked_add(1)
                .ok_or(RegionError::TooManyLabels(sets.len()))?;
            final_label[root] = count;
        }
        labels.push(final_label[root]);
    }

    log::debug!("label_points: {count} components among {} points", sets.len());
    Ok(PointLabeling { labels, count })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_in_plane() {
        let points: [[i64; 2]; 6] = [[5, 5], [0, 0], [5, 6], [-1, -1], [0, 0], [9, 9]];
        let eight = Connectivity::from_code(8).unwrap();
        let result = label_points(&points, &eight).unwrap();
        assert_eq!(result.count, 3);
        assert_eq!(result.labels, vec![1, 2, 1, 2, 2, 3]);

        let four = Connectivity::from_code(4).unwrap();
        let result = label_points(&points, &four).unwrap();
        assert_eq!(result.count, 4);
        assert_eq!(result.labels, vec![1, 2, 1, 3, 2, 4]);
    }

    #[test]
    fn test_chain_joined_late() {
        // The middle point arrives last and bridges two earlier groups.
        let points: Vec<Vec<i64>> = vec![vec![0, 0, 0], vec![0, 0, 2], vec![0, 0, 1]];
        let six = Connectivity::from_code(6).unwrap();
        let result = label_points(&points, &six).unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(result.labels, vec![1, 1, 1]);
    }

    #[test]
    fn test_empty_and_ragged() {
        let none: [[i64; 2]; 0] = [];
        let conn = Connectivity::from_code(8).unwrap();
        assert_eq!(label_points(&none, &conn).unwrap().count, 0);

        let ragged: Vec<Vec<i64>> = vec![vec![0, 0], vec![1]];
        assert!(matches!(
            label_points(&ragged, &conn),
            Err(RegionError::InvalidParameters(_))
        ));
    }
}
