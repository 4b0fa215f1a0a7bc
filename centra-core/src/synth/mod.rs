// Imports
use itertools::Itertools;
use rand::distr::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand_distr::Normal;
use thiserror::Error;

use crate::data::{Float, PointSet};

/// Produces reproducible synthetic benchmark datasets: isotropic Gaussian blobs, each
/// feature min-max normalized to [0, 1], plus a candidate centroid sample drawn from the
/// normalized points
#[derive(Debug, Clone)]
pub struct Generator {
    pub cluster_std: Float,
    pub center_box: (Float, Float),
}

impl Default for Generator {
    fn default() -> Self {
        Self { cluster_std: 1.2, center_box: (-10.0, 10.0) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Blobs {
    pub points: PointSet,
    pub centroids: PointSet,
}

impl Generator {
    pub fn with_cluster_std(
        self,
        cluster_std: Float,
    ) -> Self {
        Self { cluster_std, ..self }
    }

    pub fn with_center_box(
        self,
        center_box: (Float, Float),
    ) -> Self {
        Self { center_box, ..self }
    }

    /// Generates `samples` points in `dim` dimensions spread as evenly as possible across
    /// `clusters` Gaussian blobs, then samples `clusters` of the normalized points without
    /// replacement as candidate centroids (identifiers follow sampling order)
    pub fn generate(
        &self,
        samples: usize,
        dim: usize,
        clusters: usize,
        rng: &mut impl rand::Rng,
    ) -> Result<Blobs, Error> {
        if samples == 0 || dim == 0 || clusters == 0 {
            return Err(Error::InvalidArgument(
                "`samples`, `dim` and `clusters` must all be positive".to_string(),
            ));
        }
        if clusters > samples {
            return Err(Error::InvalidArgument(format!(
                "cannot sample {clusters} centroids from {samples} points"
            )));
        }
        let center_distr = Uniform::new(self.center_box.0, self.center_box.1)
            .map_err(|err| Error::InvalidArgument(format!("bad center box, {err}")))?;
        let noise_distr = Normal::new(0.0, self.cluster_std)
            .map_err(|err| Error::InvalidArgument(format!("bad cluster spread, {err}")))?;

        let centers: Vec<Vec<Float>> = (0..clusters)
            .map(|_| (0..dim).map(|_| center_distr.sample(&mut *rng)).collect())
            .collect_vec();

        // the first `samples % clusters` blobs each take one extra point
        let base = samples / clusters;
        let extra = samples % clusters;
        let mut rows: Vec<Vec<Float>> = Vec::with_capacity(samples);
        for (blob_idx, center) in centers.iter().enumerate() {
            let amount = base + usize::from(blob_idx < extra);
            for _ in 0..amount {
                rows.push(center.iter().map(|&coord| coord + noise_distr.sample(&mut *rng)).collect());
            }
        }
        rows.shuffle(rng);

        // min-max normalize each feature over the full set; a degenerate feature
        // (min == max) maps to 0.0
        for feature in 0..dim {
            let mut min = Float::INFINITY;
            let mut max = Float::NEG_INFINITY;
            for row in rows.iter() {
                min = min.min(row[feature]);
                max = max.max(row[feature]);
            }
            let range = max - min;
            for row in rows.iter_mut() {
                row[feature] = if range == 0.0 { 0.0 } else { (row[feature] - min) / range };
            }
        }

        let centroid_rows = rand::seq::index::sample(rng, samples, clusters)
            .into_iter()
            .map(|row_idx| rows[row_idx].clone())
            .collect_vec();

        Ok(Blobs {
            points: PointSet::new_unchecked(rows, dim),
            centroids: PointSet::new_unchecked(centroid_rows, dim),
        })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid generator argument, {0}")]
    InvalidArgument(String),
}
