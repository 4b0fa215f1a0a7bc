use anyhow::Context;
use centra_core::prelude::*;
use console::style;

use super::*;

pub fn process(
    mut mat: ArgMatches,
    config: &Config,
) -> anyhow::Result<()> {
    let dir = data_dir(&mut mat)?;

    let dataset_filepath = dir.join(&config.dataset_filename);
    let results_filepath = dir.join(&config.results_filename);
    let points = read_points_from_file(&dataset_filepath)
        .with_context(|| format!("Failed to read the dataset at '{}'", dataset_filepath.display()))?;
    let centroids = read_points_from_file(&results_filepath).with_context(|| {
        format!("Failed to read the aggregated centroids at '{}'", results_filepath.display())
    })?;

    let labels = assign(&points, &centroids)?;
    let score = silhouette_score(&points, &labels)?;

    // the score is reported before logging so that a logging failure never masks it
    println!("Silhouette Score: {score}");

    let log_filepath = dir.join(&config.log_filename);
    append_score_to_file(&log_filepath, score)
        .with_context(|| format!("Failed to append to the log at '{}'", log_filepath.display()))?;

    println!("{} Appended the score to '{}'", style("✔").green(), log_filepath.display());
    Ok(())
}
