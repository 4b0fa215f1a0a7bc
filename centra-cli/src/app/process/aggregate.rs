use std::io::Write;

use centra_core::prelude::*;
use console::style;
use indicatif::ProgressBar;

use super::*;

pub fn process(
    mut mat: ArgMatches,
    config: &Config,
) -> anyhow::Result<()> {
    let dir = data_dir(&mut mat)?;
    let marker: String = mat.remove_one("marker").unwrap_or_else(|| config.shard_marker.clone());

    let spinner = ProgressBar::new_spinner()
        .with_message(format!("Merging '{marker}' shards under '{}'", dir.display()));
    spinner.enable_steady_tick(std::time::Duration::from_millis(200));

    let shards = collect_shards(dir.as_path(), &marker)?;
    if shards.is_empty() {
        bail!("No shard file under '{}' matches the marker '{}'", dir.display(), marker)
    }

    // merge first: a malformed record must leave neither output file behind
    let table = merge_shards(&shards)?;
    let merged = concat_shards(&shards);

    write_text_file(&dir.join(&config.merged_filename), &merged)?;
    let results_filepath = dir.join(&config.results_filename);
    write_text_file(&results_filepath, &table)?;
    spinner.finish_and_clear();

    println!(
        "{} Aggregated {} shard(s) into '{}'",
        style("✔").green(),
        shards.len(),
        results_filepath.display(),
    );
    Ok(())
}

fn write_text_file(
    filepath: &std::path::Path,
    contents: &str,
) -> anyhow::Result<()> {
    let mut file =
        std::fs::OpenOptions::new().create(true).write(true).truncate(true).open(filepath)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
