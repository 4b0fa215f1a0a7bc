// Imports
use std::{io::Write, path::Path};

use itertools::Itertools;
use nutype::nutype;
use thiserror::Error;

use crate::data::{Float, PointSet, euclidean};

/// A silhouette coefficient, guaranteed finite
#[nutype(
    default = 0_f64,
    validate(finite),
    derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deref, TryFrom, Display, Default)
)]
pub struct Score(f64);

/// Computes the mean silhouette coefficient of `points` under the cluster `labels`
/// produced by [`crate::assign::assign`].
///
/// Per point: `a(i)` is the mean distance to the other members of its cluster, `b(i)` the
/// minimum over the other clusters of the mean distance to that cluster, and the score is
/// `(b - a) / max(a, b)`, taken as 0 when the point's cluster has a single member.
pub fn silhouette_score(
    points: &PointSet,
    labels: &[usize],
) -> Result<Score, Error> {
    // group point indices by their assigned centroid, dropping empty clusters
    let nb_slots = labels.iter().max().map(|max| max + 1).unwrap_or(0);
    let mut clusters: Vec<Vec<usize>> = vec![Vec::new(); nb_slots];
    for ((point_idx, &label), _) in labels.iter().enumerate().zip_eq(points.iter()) {
        clusters[label].push(point_idx);
    }
    clusters.retain(|members| !members.is_empty());

    if clusters.len() < 2 {
        return Err(Error::UndefinedMetric { nb_clusters: clusters.len() });
    }

    let mut total: Float = 0.0;
    for (cluster_idx, members) in clusters.iter().enumerate() {
        if members.len() == 1 {
            continue;
        }
        for &i in members {
            let a = members
                .iter()
                .filter(|&&j| j != i)
                .map(|&j| euclidean(points.row(i), points.row(j)))
                .sum::<Float>()
                / (members.len() - 1) as Float;
            let b = clusters
                .iter()
                .enumerate()
                .filter(|(other_idx, _)| *other_idx != cluster_idx)
                .map(|(_, other)| {
                    other.iter().map(|&j| euclidean(points.row(i), points.row(j))).sum::<Float>()
                        / other.len() as Float
                })
                .min_by(|x, y| x.total_cmp(y))
                .unwrap();

            let denom = a.max(b);
            if denom > 0.0 {
                total += (b - a) / denom;
            }
        }
    }

    Ok(Score::try_new(total / points.len() as Float).unwrap_or_default())
}

/// Appends one quality record to `output`: a blank separator line followed by the score
/// line, flushed before the handle is returned
pub fn append_score<W: Write>(
    mut output: W,
    score: Score,
) -> Result<W, Error> {
    writeln!(output, "\nSilhouette Score: {score}")?;
    output.flush()?;
    Ok(output)
}

/// Appends one quality record to the log file at `filepath`, creating it if needed. The
/// handle is scoped to this call, prior entries are never rewritten or reordered.
///
/// Concurrent appenders are not serialized here, that is left to the caller.
pub fn append_score_to_file<Q: AsRef<Path>>(
    filepath: Q,
    score: Score,
) -> Result<(), Error> {
    let file = append_score(
        std::fs::OpenOptions::new().create(true).append(true).open(filepath.as_ref())?,
        score,
    )?;
    file.sync_all()?;
    Ok(())
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error("Silhouette score is undefined for {nb_clusters} non-empty cluster(s), at least 2 are required")]
    UndefinedMetric { nb_clusters: usize },
}
