// Modules
mod aggregate;
mod evaluate;
mod generate;
mod misc;

// Imports
use std::path::PathBuf;

use anyhow::bail;
use clap::ArgMatches;
pub(in crate::app) use aggregate::process as aggregate;
pub(in crate::app) use evaluate::process as evaluate;
pub(in crate::app) use generate::process as generate;
pub(in crate::app) use misc::process_misc as misc;

use crate::app::config::Config;

fn data_dir(mat: &mut ArgMatches) -> anyhow::Result<PathBuf> {
    let dir: PathBuf = mat.remove_one("dir").unwrap();
    if !dir.is_dir() {
        bail!("Invalid data directory: '{}'", dir.display())
    }
    Ok(dir)
}
