pub use crate::aggregate::{
    Error as AggregateError, Shard, aggregate_to_file, collect_shards, collect_shards_with,
    concat_shards, merge_shards,
};
pub use crate::assign::{Error as AssignError, assign};
pub use crate::data::{Float, PointSet, euclidean, euclidean_sq};
pub use crate::evaluate::{
    Error as EvaluateError, Score, append_score, append_score_to_file, silhouette_score,
};
pub use crate::io::{read_points, read_points_from_file, write_points, write_points_to_file};
pub use crate::synth::{Blobs, Generator};
