//! This module contains functionality to aggregate results of many independent runs: it selects
//! the best and the median run by hypervolume, computes summary statistics and forwards artifacts
//! of the selected runs under canonical names.

#[cfg(test)]
#[path = "../../tests/unit/aggregation/aggregation_test.rs"]
mod aggregation_test;

use crate::format::get_sequence_paths;
use crate::utils::{Float, GenericResult, compare_floats};
use std::path::{Path, PathBuf};

/// Keeps indices of the best and the median runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunRanking {
    /// Index of the run with the highest hypervolume.
    pub best: usize,
    /// Index of the run at the middle sorted position (upper middle for even amount of runs).
    pub median: usize,
}

impl RunRanking {
    /// Ranks runs by their hypervolume values. Returns `None` if there are no runs.
    pub fn new(hypervolumes: &[Float]) -> Option<Self> {
        if hypervolumes.is_empty() {
            return None;
        }

        let mut sorted = hypervolumes.iter().copied().zip(0..).collect::<Vec<(Float, usize)>>();
        sorted.sort_by(|(a_value, a_idx), (b_value, b_idx)| {
            compare_floats(*a_value, *b_value).then_with(|| a_idx.cmp(b_idx))
        });

        let best = sorted.last().map(|(_, idx)| *idx)?;
        let median = sorted[sorted.len() / 2].1;

        Some(Self { best, median })
    }
}

/// Summary statistics of indicator values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    /// Mean value.
    pub mean: Float,
    /// Population standard deviation.
    pub stdev: Float,
}

impl Summary {
    /// Creates a new instance of `Summary`. Both statistics are zero when there are no values.
    pub fn new(values: &[Float]) -> Self {
        if values.is_empty() {
            return Self { mean: 0., stdev: 0. };
        }

        let size = values.len() as Float;
        let mean = values.iter().sum::<Float>() / size;
        let variance = values.iter().map(|value| (value - mean).powi(2)).sum::<Float>() / size;

        Self { mean, stdev: variance.sqrt() }
    }
}

/// Specifies how an artifact is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactKind {
    /// A single file.
    File,
    /// A sequence of `<prefix><index>.txt` files, index starts from zero.
    Sequence,
}

/// A per run artifact (statistics, Pareto front, snapshot series, etc.) to be forwarded.
#[derive(Clone, Debug)]
pub struct Artifact {
    name: String,
    kind: ArtifactKind,
    paths: Vec<Option<PathBuf>>,
}

impl Artifact {
    /// Creates a new instance of `Artifact`. Paths are indexed by run, a missing path means that
    /// the run has no such artifact.
    pub fn new(name: &str, kind: ArtifactKind, paths: Vec<Option<PathBuf>>) -> Self {
        Self { name: name.to_string(), kind, paths }
    }

    /// Creates a single file artifact from paths of all runs.
    pub fn files(name: &str, paths: Vec<PathBuf>) -> Self {
        Self::new(name, ArtifactKind::File, paths.into_iter().map(Some).collect())
    }

    /// Creates a file sequence artifact from path prefixes of all runs.
    pub fn sequences(name: &str, prefixes: Vec<PathBuf>) -> Self {
        Self::new(name, ArtifactKind::Sequence, prefixes.into_iter().map(Some).collect())
    }

    /// Returns artifact name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Copies artifacts of the best and the median runs into the output directory as
/// `<name>-best.txt`/`<name>-median.txt` (or `<name>-best-<index>.txt` for sequences).
/// Returns paths of written files.
pub fn forward_artifacts(ranking: &RunRanking, artifacts: &[Artifact], out_dir: &Path) -> GenericResult<Vec<PathBuf>> {
    let mut written = Vec::new();

    for artifact in artifacts {
        for (label, run_idx) in [("best", ranking.best), ("median", ranking.median)] {
            let Some(source) = artifact.paths.get(run_idx).and_then(|path| path.as_ref()) else {
                continue;
            };

            match artifact.kind {
                ArtifactKind::File => {
                    let target = out_dir.join(format!("{}-{label}.txt", artifact.name));
                    copy_file(source, &target)?;
                    written.push(target);
                }
                ArtifactKind::Sequence => {
                    for (idx, source) in get_sequence_paths(source).into_iter().enumerate() {
                        let target = out_dir.join(format!("{}-{label}-{idx}.txt", artifact.name));
                        copy_file(&source, &target)?;
                        written.push(target);
                    }
                }
            }
        }
    }

    Ok(written)
}

fn copy_file(source: &Path, target: &Path) -> GenericResult<()> {
    std::fs::copy(source, target)
        .map(|_| ())
        .map_err(|err| format!("cannot copy '{}' to '{}': '{err}'", source.display(), target.display()).into())
}
