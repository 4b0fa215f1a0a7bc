// Imports
use std::{io::Write, path::Path};

use itertools::Itertools;
use thiserror::Error;

/// A shard's filename together with its full contents
pub type Shard = (String, String);

/// Gathers the shard files under `dir` whose filename contains `marker`, in directory
/// listing order
pub fn collect_shards<Q: AsRef<Path>>(
    dir: Q,
    marker: &str,
) -> Result<Vec<Shard>, Error> {
    collect_shards_with(dir, |filename| filename.contains(marker))
}

/// Same as [`collect_shards`] but with an arbitrary filename predicate.
///
/// Directory listing order is platform-defined and the external job guarantees no ordering
/// across its output parts either way, so no ordering is reconstructed here.
pub fn collect_shards_with<Q: AsRef<Path>>(
    dir: Q,
    predicate: impl Fn(&str) -> bool,
) -> Result<Vec<Shard>, Error> {
    let mut shards: Vec<Shard> = Vec::new();
    for entry in dir.as_ref().read_dir()? {
        let path = entry?.path();
        let Some(filename) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if !path.is_file() || !predicate(filename) {
            continue;
        }
        shards.push((filename.to_string(), std::fs::read_to_string(&path)?));
    }
    Ok(shards)
}

/// Concatenates shard contents into the raw intermediate stream, order within each shard
/// preserved
pub fn concat_shards(shards: &[Shard]) -> String {
    let mut merged = String::new();
    for (_, contents) in shards {
        merged.push_str(contents);
        if !contents.is_empty() && !contents.ends_with('\n') {
            merged.push('\n');
        }
    }
    merged
}

/// Merges shards into one canonical comma-separated table: every line is split on
/// whitespace, its first token (the job-internal key) is dropped, and the remaining tokens
/// become one row.
///
/// All-or-nothing: the first line that yields no coordinates after dropping its key aborts
/// the whole merge.
pub fn merge_shards(shards: &[Shard]) -> Result<String, Error> {
    let mut table = String::new();
    for (filename, contents) in shards {
        for (line_idx, line) in contents.lines().enumerate() {
            let coords = line.split_whitespace().skip(1).join(",");
            if coords.is_empty() {
                return Err(Error::MalformedRecord {
                    file: filename.clone(),
                    line: line_idx + 1,
                });
            }
            table.push_str(&coords);
            table.push('\n');
        }
    }
    Ok(table)
}

/// Merges the shards under `dir` and writes the canonical table to `output_filepath`.
/// The table is fully built in memory first, a failed merge leaves no output file behind.
pub fn aggregate_to_file<Q: AsRef<Path>>(
    dir: Q,
    marker: &str,
    output_filepath: Q,
) -> Result<(), Error> {
    let table = merge_shards(&collect_shards(dir, marker)?)?;

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(output_filepath.as_ref())?;
    file.write_all(table.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error("Record on line {line} of shard '{file}' holds no coordinates after its key")]
    MalformedRecord { file: String, line: usize },
}

#[cfg(test)]
mod test {
    use indoc::indoc;

    use super::*;

    fn shard(
        name: &str,
        contents: &str,
    ) -> Shard {
        (name.to_string(), contents.to_string())
    }

    #[test]
    fn merge_drops_the_job_key_and_emits_csv_rows() {
        let shards = [shard("part-r-00000", "1 0.1 0.2\n"), shard("part-r-00001", "2 0.3 0.4\n")];

        let table = merge_shards(&shards).unwrap();
        assert_eq!(table, "0.1,0.2\n0.3,0.4\n");
    }

    #[test]
    fn merge_yields_the_same_row_set_in_either_shard_order() {
        let a = shard("part-r-00000", "1 0.1 0.2\n");
        let b = shard("part-r-00001", "2 0.3 0.4\n");

        let forward = merge_shards(&[a.clone(), b.clone()]).unwrap();
        let backward = merge_shards(&[b, a]).unwrap();

        let mut forward_rows: Vec<&str> = forward.lines().collect();
        let mut backward_rows: Vec<&str> = backward.lines().collect();
        forward_rows.sort_unstable();
        backward_rows.sort_unstable();
        assert_eq!(forward_rows, backward_rows);
    }

    #[test]
    fn merge_preserves_order_within_a_shard() {
        let shards = [shard(
            "part-r-00000",
            indoc! {"
                3 9.0 8.0
                1 0.1 0.2
                2 0.3 0.4
            "},
        )];

        assert_eq!(merge_shards(&shards).unwrap(), "9.0,8.0\n0.1,0.2\n0.3,0.4\n");
    }

    #[test]
    fn merge_rejects_a_keyless_record() {
        let shards = [shard("part-r-00000", "1 0.1 0.2\nlonely\n")];

        match merge_shards(&shards).unwrap_err() {
            Error::MalformedRecord { file, line } => {
                assert_eq!(file, "part-r-00000");
                assert_eq!(line, 2);
            }
            other => panic!("Expected a malformed record error, got {other:?}"),
        }
    }

    #[test]
    fn aggregate_to_file_selects_shards_by_marker() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("part-r-00000"), "1 0.1 0.2\n").unwrap();
        std::fs::write(dir.path().join("part-r-00001"), "2 0.3 0.4\n").unwrap();
        std::fs::write(dir.path().join("_SUCCESS"), "").unwrap();
        std::fs::write(dir.path().join("dataset_test.csv"), "5.0,6.0\n").unwrap();

        let output = dir.path().join("results.csv");
        aggregate_to_file(dir.path(), "part", output.as_path()).unwrap();

        let table = std::fs::read_to_string(&output).unwrap();
        let mut rows: Vec<&str> = table.lines().collect();
        rows.sort_unstable();
        assert_eq!(rows, ["0.1,0.2", "0.3,0.4"]);
    }

    #[test]
    fn aggregate_to_file_leaves_no_output_behind_on_a_malformed_record() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("part-r-00000"), "1\n").unwrap();

        let output = dir.path().join("results.csv");
        assert!(matches!(
            aggregate_to_file(dir.path(), "part", output.as_path()).unwrap_err(),
            Error::MalformedRecord { .. }
        ));
        assert!(!output.exists());
    }

    #[test]
    fn concat_preserves_shard_contents_verbatim() {
        let shards = [shard("part-r-00000", "1 0.1 0.2\n"), shard("part-r-00001", "2 0.3 0.4")];
        assert_eq!(concat_shards(&shards), "1 0.1 0.2\n2 0.3 0.4\n");
    }
}
