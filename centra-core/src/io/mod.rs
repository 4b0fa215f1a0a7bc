// Imports
use std::{
    io::{BufRead, BufReader, Read, Write},
    path::Path,
};

use itertools::Itertools;
use thiserror::Error;

use crate::data::{Float, PointSet};

/// Reads a comma-separated, header-less table of numeric rows into a [`PointSet`]
pub fn read_points<R: Read>(input: R) -> Result<PointSet, Error> {
    let mut rows: Vec<Vec<Float>> = Vec::new();
    for (line_idx, line) in BufReader::new(input).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split(',')
            .map(|field| field.trim().parse::<Float>())
            .collect::<Result<Vec<Float>, _>>()
            .map_err(|source| Error::Parse { line: line_idx + 1, source })?;
        rows.push(row);
    }
    PointSet::new(rows).map_err(Error::from)
}

pub fn read_points_from_file<Q: AsRef<Path>>(filepath: Q) -> Result<PointSet, Error> {
    read_points(std::fs::OpenOptions::new().read(true).open(filepath.as_ref())?)
}

/// Writes a [`PointSet`] as comma-separated values, no header, one row per point
pub fn write_points<W: Write>(
    mut output: W,
    points: &PointSet,
) -> Result<W, Error> {
    let data: String =
        points.iter().map(|row| row.iter().map(Float::to_string).join(",")).join("\n");

    output.write_all(data.as_bytes())?;
    output.write_all(b"\n")?;
    Ok(output)
}

pub fn write_points_to_file<Q: AsRef<Path>>(
    filepath: Q,
    points: &PointSet,
) -> Result<(), Error> {
    let file = write_points(
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(filepath.as_ref())?,
        points,
    )?;
    file.sync_all()?;
    Ok(())
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error("Failed to parse a numeric field on line {line}, {source}")]
    Parse { line: usize, source: std::num::ParseFloatError },
    #[error(transparent)]
    Data(#[from] crate::data::Error),
}
