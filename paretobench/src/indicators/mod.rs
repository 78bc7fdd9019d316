//! This module contains quality indicators which score Pareto front approximations against
//! a reference front:
//! - **hypervolume ratio**: a share of the reference front hypervolume covered by the front
//! - **modified IGD+**: how far the reference front is from being dominated by the front
//! - **multiplicative epsilon**: the smallest scaling factor which makes the front weakly dominate the reference one
//!
//! The [`IndicatorEngine`] scores final fronts and snapshot fronts of many runs at once, so the
//! hypervolume reference point and IGD+ normalization are shared by all of them.

#[cfg(test)]
#[path = "../../tests/unit/indicators/indicators_test.rs"]
mod indicators_test;

mod evaluation;
pub use self::evaluation::*;

use crate::algorithms::geometry::{DefaultHypervolume, HypervolumeCalculator};
use crate::models::{ObjectiveConfig, Point};
use crate::snapshots::Snapshot;
use crate::utils::{Float, GenericResult, parallel_collect};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

/// Specifies a quality indicator kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorKind {
    /// A hypervolume ratio in [0, 1], higher is better.
    HypervolumeRatio,
    /// A raw modified IGD+ value, lower is better.
    ModifiedIgdPlus,
    /// A modified IGD+ value divided by the maximum value observed across all runs and snapshots.
    NormalizedIgdPlus,
    /// A multiplicative epsilon value. The engine asserts it lies in [0, 1], which holds for fronts
    /// in normalized benchmark objective ranges only.
    MultiplicativeEpsilon,
}

impl FromStr for IndicatorKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "hypervolume" => Ok(Self::HypervolumeRatio),
            "igd-plus" => Ok(Self::ModifiedIgdPlus),
            "normalized-igd-plus" => Ok(Self::NormalizedIgdPlus),
            "epsilon" => Ok(Self::MultiplicativeEpsilon),
            _ => Err(format!("unknown indicator: '{value}'")),
        }
    }
}

impl Display for IndicatorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::HypervolumeRatio => "hypervolume",
            Self::ModifiedIgdPlus => "igd-plus",
            Self::NormalizedIgdPlus => "normalized-igd-plus",
            Self::MultiplicativeEpsilon => "epsilon",
        };

        write!(f, "{name}")
    }
}

/// Fronts produced by a single run: the final one and the snapshots in capture order.
#[derive(Clone, Debug, Default)]
pub struct RunFronts {
    /// A final front.
    pub front: Vec<Point>,
    /// Snapshots in capture order.
    pub snapshots: Vec<Snapshot>,
    /// Population snapshots. They are not scored, but widen the hypervolume reference point.
    pub populations: Vec<Snapshot>,
}

/// An indicator value of a single snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotScore {
    /// Snapshot iteration.
    pub iteration: usize,
    /// Snapshot elapsed time in seconds.
    pub elapsed: Float,
    /// Indicator value.
    pub value: Float,
}

/// Indicator values of a single run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunScores {
    /// Indicator value of the final front.
    pub value: Float,
    /// Indicator values of the snapshots in capture order.
    pub snapshots: Vec<SnapshotScore>,
}

/// Scores runs against a reference front.
pub struct IndicatorEngine {
    config: ObjectiveConfig,
    calculator: Arc<dyn HypervolumeCalculator>,
}

impl IndicatorEngine {
    /// Creates a new instance of `IndicatorEngine` with default hypervolume calculator.
    pub fn new(config: ObjectiveConfig) -> Self {
        Self::with_calculator(config, Arc::new(DefaultHypervolume))
    }

    /// Creates a new instance of `IndicatorEngine` with custom hypervolume calculator.
    pub fn with_calculator(config: ObjectiveConfig, calculator: Arc<dyn HypervolumeCalculator>) -> Self {
        Self { config, calculator }
    }

    /// Scores final and snapshot fronts of all runs using given indicator.
    pub fn evaluate(
        &self,
        kind: IndicatorKind,
        reference_front: &[Point],
        runs: &[RunFronts],
    ) -> GenericResult<Vec<RunScores>> {
        self.validate(reference_front, runs)?;

        match kind {
            IndicatorKind::HypervolumeRatio => Ok(self.evaluate_hypervolume(reference_front, runs)),
            IndicatorKind::ModifiedIgdPlus => {
                self.evaluate_non_empty(kind, runs, |front| modified_igd_plus(&self.config, reference_front, front))
            }
            IndicatorKind::NormalizedIgdPlus => {
                let scores = self.evaluate_non_empty(kind, runs, |front| {
                    modified_igd_plus(&self.config, reference_front, front)
                })?;
                Ok(normalize_scores(scores))
            }
            IndicatorKind::MultiplicativeEpsilon => {
                let scores = self.evaluate_non_empty(kind, runs, |front| {
                    multiplicative_epsilon(&self.config, reference_front, front)
                })?;

                scores.iter().for_each(|score| {
                    assert!((0. ..=1.).contains(&score.value), "epsilon is out of range: {}", score.value)
                });

                Ok(scores)
            }
        }
    }

    fn validate(&self, reference_front: &[Point], runs: &[RunFronts]) -> GenericResult<()> {
        if reference_front.is_empty() {
            return Err("reference front is empty".into());
        }

        let dimension = self.config.dimension();

        get_all_fronts(reference_front, runs).flat_map(|front| front.iter()).try_for_each(|point| {
            if point.len() == dimension {
                Ok(())
            } else {
                Err(format!("expected {dimension} objectives, got {}: {point:?}", point.len()).into())
            }
        })
    }

    fn evaluate_hypervolume(&self, reference_front: &[Point], runs: &[RunFronts]) -> Vec<RunScores> {
        // NOTE reference front is not empty, so there is at least one point
        let reference_point =
            get_reference_point(&self.config, get_all_fronts(reference_front, runs)).unwrap_or_default();

        let calculator = self.calculator.as_ref();
        let reference_hypervolume =
            get_hypervolume(calculator, &self.config, reference_front, reference_point.as_slice());

        let score = |front: &[Point]| {
            let hypervolume = get_hypervolume(calculator, &self.config, front, reference_point.as_slice());
            get_hypervolume_ratio(hypervolume, reference_hypervolume)
        };

        parallel_collect(runs, |run| score_run(run, &score))
    }

    fn evaluate_non_empty<F>(&self, kind: IndicatorKind, runs: &[RunFronts], score: F) -> GenericResult<Vec<RunScores>>
    where
        F: Fn(&[Point]) -> Float + Send + Sync,
    {
        let empty_front = runs.iter().enumerate().find_map(|(run_idx, run)| {
            if run.front.is_empty() {
                Some(format!("cannot compute {kind} for run {run_idx}: front is empty"))
            } else {
                run.snapshots.iter().find(|snapshot| snapshot.front().is_empty()).map(|snapshot| {
                    format!(
                        "cannot compute {kind} for run {run_idx}: snapshot at iteration {} is empty",
                        snapshot.iteration()
                    )
                })
            }
        });

        if let Some(err) = empty_front {
            return Err(err.into());
        }

        Ok(parallel_collect(runs, |run| score_run(run, &score)))
    }
}

/// Returns the reference front followed by every front and population captured by the runs.
fn get_all_fronts<'a>(
    reference_front: &'a [Point],
    runs: &'a [RunFronts],
) -> impl Iterator<Item = &'a [Point]> + 'a {
    std::iter::once(reference_front).chain(runs.iter().flat_map(|run| {
        std::iter::once(run.front.as_slice())
            .chain(run.snapshots.iter().map(|snapshot| snapshot.front()))
            .chain(run.populations.iter().map(|population| population.front()))
    }))
}

fn score_run<F>(run: &RunFronts, score: F) -> RunScores
where
    F: Fn(&[Point]) -> Float,
{
    RunScores {
        value: score(run.front.as_slice()),
        snapshots: run
            .snapshots
            .iter()
            .map(|snapshot| SnapshotScore {
                iteration: snapshot.iteration(),
                elapsed: snapshot.elapsed(),
                value: score(snapshot.front()),
            })
            .collect(),
    }
}

/// Divides all values by the maximum value observed in the comparison set.
fn normalize_scores(mut scores: Vec<RunScores>) -> Vec<RunScores> {
    let max_value = scores
        .iter()
        .flat_map(|run| std::iter::once(run.value).chain(run.snapshots.iter().map(|snapshot| snapshot.value)))
        .fold(0., Float::max);

    let normalize = |value: Float| {
        let normalized = if max_value > 0. { value / max_value } else { 0. };
        assert!((0. ..=1.).contains(&normalized), "normalized value is out of range: {normalized}");
        normalized
    };

    scores.iter_mut().for_each(|run| {
        run.value = normalize(run.value);
        run.snapshots.iter_mut().for_each(|snapshot| snapshot.value = normalize(snapshot.value));
    });

    scores
}
