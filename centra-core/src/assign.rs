// Imports
use itertools::Itertools;
use thiserror::Error;

use crate::data::{PointSet, euclidean_sq};

/// Labels every point with the index of its nearest centroid under Euclidean distance.
///
/// Squared distances are compared directly since the square root is monotonic, the argmin is
/// unaffected. Exact ties resolve to the lowest centroid index, deterministically. Runs in
/// O(n·k·d).
pub fn assign(
    points: &PointSet,
    centroids: &PointSet,
) -> Result<Vec<usize>, Error> {
    if points.is_empty() || centroids.is_empty() {
        return Err(Error::EmptyInput { points: points.len(), centroids: centroids.len() });
    }
    if points.dim() != centroids.dim() {
        return Err(Error::DimensionMismatch { points: points.dim(), centroids: centroids.dim() });
    }

    Ok(points
        .iter()
        .map(|point| {
            centroids
                .iter()
                .map(|centroid| euclidean_sq(point, centroid))
                .position_min_by(|a, b| a.total_cmp(b))
                .unwrap()
        })
        .collect_vec())
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Expected at least one point and one centroid, got {points} point(s) and {centroids} centroid(s)")]
    EmptyInput { points: usize, centroids: usize },
    #[error("Points carry {points} coordinates but centroids carry {centroids}")]
    DimensionMismatch { points: usize, centroids: usize },
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::euclidean;

    #[test]
    fn every_point_goes_to_its_nearest_centroid() {
        let points =
            PointSet::new(vec![vec![0.0, 0.1], vec![0.9, 1.0], vec![0.4, 0.4], vec![1.0, 0.0]])
                .unwrap();
        let centroids = PointSet::new(vec![vec![0.0, 0.0], vec![1.0, 1.0]]).unwrap();

        let labels = assign(&points, &centroids).unwrap();
        assert_eq!(labels, vec![0, 1, 0, 0]);

        for (point, &label) in points.iter().zip(labels.iter()) {
            assert!(label < centroids.len());
            let assigned = euclidean(point, centroids.row(label));
            for centroid in centroids.iter() {
                assert!(assigned <= euclidean(point, centroid));
            }
        }
    }

    #[test]
    fn exact_ties_resolve_to_the_lowest_centroid_index() {
        let points = PointSet::new(vec![vec![0.5]]).unwrap();
        // both centroids sit exactly 0.5 away
        let centroids = PointSet::new(vec![vec![0.0], vec![1.0]]).unwrap();

        for _ in 0..10 {
            assert_eq!(assign(&points, &centroids).unwrap(), vec![0]);
        }
    }

    #[test]
    fn assignment_is_idempotent() {
        let points = PointSet::new(vec![vec![0.2, 0.3], vec![0.8, 0.7], vec![0.5, 0.5]]).unwrap();
        let centroids = PointSet::new(vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![0.5, 0.5]]).unwrap();

        let first = assign(&points, &centroids).unwrap();
        let second = assign(&points, &centroids).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_and_mismatched_inputs_are_rejected() {
        let empty = PointSet::new(Vec::new()).unwrap();
        let points = PointSet::new(vec![vec![0.0, 0.0]]).unwrap();
        let centroids_3d = PointSet::new(vec![vec![0.0, 0.0, 0.0]]).unwrap();

        assert!(matches!(assign(&empty, &points), Err(Error::EmptyInput { .. })));
        assert!(matches!(assign(&points, &empty), Err(Error::EmptyInput { .. })));
        assert!(matches!(
            assign(&points, &centroids_3d),
            Err(Error::DimensionMismatch { points: 2, centroids: 3 })
        ));
    }
}
