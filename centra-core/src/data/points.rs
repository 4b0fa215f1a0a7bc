// Imports
use itertools::Itertools;
use thiserror::Error;

pub type Float = f64;

/// An ordered collection of real-valued vectors that all share the same dimension,
/// validated once at construction. Serves both as a dataset and as a centroid table,
/// centroid identifiers being derived from row order.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    rows: Vec<Vec<Float>>,
    dim: usize,
}

impl PointSet {
    pub fn new(rows: Vec<Vec<Float>>) -> Result<Self, Error> {
        let dim = rows.first().map(Vec::len).unwrap_or(0);
        if let Some((row_idx, row)) = rows.iter().find_position(|row| row.len() != dim) {
            return Err(Error::DimensionMismatch { row: row_idx, expected: dim, got: row.len() });
        }
        Ok(Self { rows, dim })
    }

    /// Skips the uniform-dimension check, `rows` must already be rectangular
    pub(crate) fn new_unchecked(
        rows: Vec<Vec<Float>>,
        dim: usize,
    ) -> Self {
        Self { rows, dim }
    }

    /// The number of coordinates each row carries
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The number of rows held
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Float>] {
        &self.rows
    }

    pub fn row(
        &self,
        idx: usize,
    ) -> &[Float] {
        &self.rows[idx]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Float]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn into_rows(self) -> Vec<Vec<Float>> {
        self.rows
    }
}

/// Squared Euclidean distance, cheaper than [`euclidean`] and order-preserving since the
/// square root is monotonic
#[inline]
pub fn euclidean_sq(
    a: &[Float],
    b: &[Float],
) -> Float {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// True Euclidean distance
#[inline]
pub fn euclidean(
    a: &[Float],
    b: &[Float],
) -> Float {
    euclidean_sq(a, b).sqrt()
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Expected {expected} coordinates for row {row}, got {got}")]
    DimensionMismatch { row: usize, expected: usize, got: usize },
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_float_eq;

    #[test]
    fn pointset_rejects_ragged_rows() {
        let err = PointSet::new(vec![vec![0.0, 1.0], vec![2.0], vec![3.0, 4.0]]).unwrap_err();
        let Error::DimensionMismatch { row, expected, got } = err;
        assert_eq!((row, expected, got), (1, 2, 1));
    }

    #[test]
    fn pointset_accepts_empty_and_rectangular_input() {
        let empty = PointSet::new(Vec::new()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.dim(), 0);

        let points = PointSet::new(vec![vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points.dim(), 2);
        assert_eq!(points.row(1), &[2.0, 3.0]);
    }

    #[test]
    fn euclidean_test() {
        assert_float_eq!(euclidean(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
        assert_float_eq!(euclidean_sq(&[0.0, 0.0], &[3.0, 4.0]), 25.0);
        assert_float_eq!(euclidean(&[1.5], &[1.5]), 0.0);
    }
}
