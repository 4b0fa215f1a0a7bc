use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

/// Filenames and defaults shared by every pipeline stage, loaded from a JSON file and
/// written out with defaults on first run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename = "config")]
pub struct Config {
    pub dataset_filename: String,
    pub centroids_filename: String,
    pub merged_filename: String,
    pub results_filename: String,
    pub log_filename: String,
    pub shard_marker: String,
    pub default_seed: u64,
    pub default_cluster_std: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_filename: "dataset_test.csv".to_string(),
            centroids_filename: "centroids_test.csv".to_string(),
            merged_filename: "output.txt".to_string(),
            results_filename: "results.csv".to_string(),
            log_filename: "map_reduce_log.txt".to_string(),
            shard_marker: "part".to_string(),
            default_seed: 1,
            default_cluster_std: 1.2,
        }
    }
}

impl Config {
    pub const FILENAME: &'static str = "config.json";

    pub fn load(filepath: &std::path::Path) -> Self {
        match Self::from_file(filepath) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Warning: failed to load configuration from file, '{err}'");
                let config = Self::default();
                let Ok(downcast_error) = err.downcast::<std::io::Error>() else {
                    return config;
                };
                if downcast_error.kind() == std::io::ErrorKind::NotFound {
                    match config.to_file(filepath) {
                        Ok(()) => eprintln!(
                            "Warning: Created default configuration file, at '{}'",
                            filepath.display()
                        ),
                        Err(error) => eprintln!(
                            "Warning: Failed to create default configuration file, at '{}', caused by '{}'",
                            filepath.display(),
                            error
                        ),
                    }
                }
                config
            }
        }
    }

    fn from_file(filepath: &std::path::Path) -> anyhow::Result<Self> {
        let mut buffer: Vec<u8> = Vec::new();
        std::fs::OpenOptions::new()
            .create(false)
            .read(true)
            .open(filepath)?
            .read_to_end(&mut buffer)?;
        Ok(ijson::from_value(&serde_json::from_slice(&buffer)?)?)
    }

    fn to_file(
        &self,
        filepath: &std::path::Path,
    ) -> anyhow::Result<()> {
        let mut file = std::fs::OpenOptions::new().write(true).create_new(true).open(filepath)?;

        file.write_all(&serde_json::to_vec_pretty(&ijson::to_value(self)?)?)?;
        file.flush()?;
        Ok(())
    }
}
