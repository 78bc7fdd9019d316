//! This module contains plain text formats used to exchange data between a solver run,
//! indicator evaluation and result aggregation:
//!
//! - **Pareto front**: one objective vector per line, values are space separated
//! - **snapshot**: `<prefix><index>.txt` files, first line is `<iteration> <elapsed>` followed by a Pareto front
//! - **scalar**: a single line with one value
//! - **series**: `iteration,elapsed,value` per snapshot
//! - **counts**: `iteration,elapsed,count` per snapshot
//! - **summary**: `mean, stdev`
//!
//! Float values are written using the shortest representation which reads back to the same value.

#[cfg(test)]
#[path = "../../tests/unit/format/format_test.rs"]
mod format_test;

use crate::aggregation::Summary;
use crate::indicators::SnapshotScore;
use crate::models::{Individual, Point};
use crate::snapshots::{NonDominatedCount, Snapshot};
use crate::utils::{Float, GenericResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Reads a Pareto front file.
pub fn read_front(path: &Path) -> GenericResult<Vec<Point>> {
    let reader = BufReader::new(open_file(path, "pareto front")?);

    read_points(reader.lines().enumerate(), path)
}

/// Writes a Pareto front file.
pub fn write_front(path: &Path, front: &[Point]) -> GenericResult<()> {
    write_file(path, "pareto front", |writer| write_points(writer, front.iter().map(|point| point.as_slice())))
}

/// Writes decision vectors of individuals, one per line.
pub fn write_solutions(path: &Path, individuals: &[Individual]) -> GenericResult<()> {
    write_file(path, "solutions", |writer| {
        write_points(writer, individuals.iter().map(|individual| individual.decision()))
    })
}

/// Reads all snapshots stored as `<prefix><index>.txt` files. Absent files mean no snapshots.
pub fn read_snapshots(prefix: &Path) -> GenericResult<Vec<Snapshot>> {
    get_sequence_paths(prefix).iter().map(|path| read_snapshot(path)).collect()
}

/// Writes snapshots as `<prefix><index>.txt` files.
pub fn write_snapshots(prefix: &Path, snapshots: &[Snapshot]) -> GenericResult<()> {
    snapshots.iter().enumerate().try_for_each(|(idx, snapshot)| {
        write_file(&get_sequence_path(prefix, idx), "snapshot", |writer| {
            writeln!(writer, "{} {}", snapshot.iteration(), snapshot.elapsed())?;
            write_points(writer, snapshot.front().iter().map(|point| point.as_slice()))
        })
    })
}

/// Reads a single value file.
pub fn read_scalar(path: &Path) -> GenericResult<Float> {
    let reader = BufReader::new(open_file(path, "value")?);

    let line = reader
        .lines()
        .next()
        .transpose()
        .map_err(|err| format!("cannot read value file '{}': '{err}'", path.display()))?
        .ok_or_else(|| format!("value file '{}' is empty", path.display()))?;

    parse_value(line.trim(), 1, path)
}

/// Writes a single value file.
pub fn write_scalar(path: &Path, value: Float) -> GenericResult<()> {
    write_file(path, "value", |writer| writeln!(writer, "{value}").map_err(From::from))
}

/// Writes values, one per line.
pub fn write_values(path: &Path, values: &[Float]) -> GenericResult<()> {
    write_file(path, "values", |writer| {
        values.iter().try_for_each(|value| writeln!(writer, "{value}")).map_err(From::from)
    })
}

/// Writes indicator values of snapshots as `iteration,elapsed,value` lines.
pub fn write_series(path: &Path, scores: &[SnapshotScore]) -> GenericResult<()> {
    write_file(path, "series", |writer| {
        scores
            .iter()
            .try_for_each(|score| writeln!(writer, "{},{},{}", score.iteration, score.elapsed, score.value))
            .map_err(From::from)
    })
}

/// Writes non-dominated population member counts as `iteration,elapsed,count` lines.
pub fn write_counts(path: &Path, counts: &[NonDominatedCount]) -> GenericResult<()> {
    write_file(path, "counts", |writer| {
        counts
            .iter()
            .try_for_each(|count| writeln!(writer, "{},{},{}", count.iteration, count.elapsed, count.count))
            .map_err(From::from)
    })
}

/// Writes summary statistics as `mean, stdev` line.
pub fn write_summary(path: &Path, summary: &Summary) -> GenericResult<()> {
    write_file(path, "statistics", |writer| writeln!(writer, "{}, {}", summary.mean, summary.stdev).map_err(From::from))
}

/// Writes an arbitrary text file.
pub fn write_text(path: &Path, description: &str, text: &str) -> GenericResult<()> {
    write_file(path, description, |writer| writer.write_all(text.as_bytes()).map_err(From::from))
}

/// Returns `<prefix><index>.txt` path.
pub fn get_sequence_path(prefix: &Path, idx: usize) -> PathBuf {
    let mut path = prefix.as_os_str().to_os_string();
    path.push(format!("{idx}.txt"));

    PathBuf::from(path)
}

/// Returns existing `<prefix><index>.txt` files: the first absent index terminates the sequence.
pub fn get_sequence_paths(prefix: &Path) -> Vec<PathBuf> {
    (0..).map(|idx| get_sequence_path(prefix, idx)).take_while(|path| path.is_file()).collect()
}

fn read_snapshot(path: &Path) -> GenericResult<Snapshot> {
    let reader = BufReader::new(open_file(path, "snapshot")?);
    let mut lines = reader.lines().enumerate();

    let header = match lines.next() {
        Some((_, line)) => line.map_err(|err| format!("cannot read snapshot file '{}': '{err}'", path.display()))?,
        None => return Err(format!("snapshot file '{}' is empty", path.display()).into()),
    };

    let mut header = header.split_whitespace();
    let (iteration, elapsed): (usize, Float) = match (header.next(), header.next(), header.next()) {
        (Some(iteration), Some(elapsed), None) => (parse_value(iteration, 1, path)?, parse_value(elapsed, 1, path)?),
        _ => return Err(format!("expected '<iteration> <elapsed>' at line 1 of '{}'", path.display()).into()),
    };

    Ok(Snapshot::new(iteration, elapsed, read_points(lines, path)?))
}

fn read_points<I>(lines: I, path: &Path) -> GenericResult<Vec<Point>>
where
    I: Iterator<Item = (usize, std::io::Result<String>)>,
{
    lines
        .filter_map(|(idx, line)| match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(
                line.split_whitespace()
                    .map(|value| parse_value::<Float>(value, idx + 1, path))
                    .collect::<GenericResult<Point>>(),
            ),
            Err(err) => Some(Err(format!("cannot read file '{}': '{err}'", path.display()).into())),
        })
        .collect()
}

fn write_points<'a, I>(writer: &mut BufWriter<File>, points: I) -> GenericResult<()>
where
    I: Iterator<Item = &'a [Float]>,
{
    points.into_iter().try_for_each(|point| {
        let line = point.iter().map(|value| value.to_string()).collect::<Vec<_>>().join(" ");
        writeln!(writer, "{line}")
    })?;

    Ok(())
}

fn parse_value<T: FromStr>(value: &str, line: usize, path: &Path) -> GenericResult<T> {
    value.parse::<T>().map_err(|_| format!("cannot parse value '{value}' at line {line} of '{}'", path.display()).into())
}

fn open_file(path: &Path, description: &str) -> GenericResult<File> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{}': '{err}'", path.display()).into())
}

fn write_file<F>(path: &Path, description: &str, write_fn: F) -> GenericResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> GenericResult<()>,
{
    let file = File::create(path).map_err(|err| format!("cannot create {description} file '{}': '{err}'", path.display()))?;
    let mut writer = BufWriter::new(file);

    write_fn(&mut writer)?;

    writer.flush().map_err(|err| format!("cannot write {description} file '{}': '{err}'", path.display()).into())
}
