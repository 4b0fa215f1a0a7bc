use centra_core::prelude::*;
use console::style;
use rand::SeedableRng;

use super::*;

pub fn process(
    mut mat: ArgMatches,
    config: &Config,
) -> anyhow::Result<()> {
    let dir = data_dir(&mut mat)?;
    let samples: usize = mat.remove_one("samples").unwrap();
    let dimension: usize = mat.remove_one("dimension").unwrap();
    let clusters: usize = mat.remove_one("clusters").unwrap();
    let seed: u64 = mat.remove_one("seed").unwrap_or(config.default_seed);
    let cluster_std: f64 = mat.remove_one("cluster-std").unwrap_or(config.default_cluster_std);

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let blobs =
        Generator::default().with_cluster_std(cluster_std).generate(samples, dimension, clusters, &mut rng)?;

    let dataset_filepath = dir.join(&config.dataset_filename);
    let centroids_filepath = dir.join(&config.centroids_filename);
    write_points_to_file(&dataset_filepath, &blobs.points)?;
    write_points_to_file(&centroids_filepath, &blobs.centroids)?;

    println!(
        "{} Wrote {} points to '{}' and {} candidate centroids to '{}'",
        style("✔").green(),
        samples,
        dataset_filepath.display(),
        clusters,
        centroids_filepath.display(),
    );
    Ok(())
}
