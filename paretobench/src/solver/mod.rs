//! This module contains the drive loop which runs an optimizer, merges what it produces into
//! the [`Archive`] and captures snapshots according to the [`SnapshotScheduler`].
//!
//! # Design
//!
//! An optimizer is plugged in through the [`OptimizerAdapter`] trait: it returns a fully
//! materialized batch of individuals per generation, the loop owns everything else:
//!
//! - termination: any of the configured criteria or an external [`Quota`] stops the run
//!   between generations, the in-flight generation is always completed
//! - archive: every batch is merged into a single archive instance owned by the loop
//! - snapshots: captured after a generation when scheduled and once after termination, the
//!   optimizer population and the amount of its non-dominated members are captured alongside
//!
//! # Examples
//!
//! ```
//! # use paretobench::prelude::*;
//! # use paretobench::example::{EvolutionaryAdapter, ZdtProblem};
//! let problem = ZdtProblem::Zdt1.with_dimension(10);
//! let adapter = EvolutionaryAdapter::new(problem, 20, Some(42));
//!
//! let result = Builder::default()
//!     .with_config(ObjectiveConfig::minimize(2))
//!     .with_adapter(Box::new(adapter))
//!     .with_max_generations(Some(10))
//!     .with_max_snapshots(5)
//!     .build()?
//!     .solve()?;
//!
//! assert!(!result.individuals.is_empty());
//! assert_eq!(result.statistics.generations, 10);
//! # Ok::<(), GenericError>(())
//! ```

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod builder;
pub use self::builder::Builder;

mod telemetry;
pub use self::telemetry::TelemetryMode;
use self::telemetry::Telemetry;

mod termination;
pub use self::termination::*;

use crate::algorithms::nsga2::non_dominated_sort;
use crate::archive::Archive;
use crate::models::{Individual, ObjectiveConfig};
use crate::snapshots::{NonDominatedCount, Snapshot, SnapshotScheduler};
use crate::utils::{Float, GenericResult, Quota, Timer};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Plugs an optimizer into the drive loop.
pub trait OptimizerAdapter {
    /// Runs one generation and returns individuals to be merged into the archive.
    fn evolve(&mut self) -> Vec<Individual>;

    /// Returns the current individuals, used to seed the archive before the first generation.
    fn current_individuals(&self) -> Vec<Individual>;

    /// Returns a seed used by the optimizer, if any.
    fn seed(&self) -> Option<u64> {
        None
    }

    /// Returns a population size used by the optimizer, if any.
    fn population_size(&self) -> Option<usize> {
        None
    }
}

/// Statistics of a single run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunStatistics {
    /// Optimizer seed.
    pub seed: Option<u64>,
    /// Time limit in seconds.
    pub time_limit: Option<Float>,
    /// Generation limit.
    pub iteration_limit: Option<usize>,
    /// Archive capacity.
    pub capacity: usize,
    /// Amount of completed generations.
    pub generations: usize,
    /// Amount of solutions in the final archive.
    pub solutions: usize,
    /// Solving time in seconds.
    pub solving_time: Float,
    /// Amount of captured snapshots.
    pub snapshots: usize,
    /// Optimizer population size.
    pub population_size: Option<usize>,
}

impl Display for RunStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fn optional<T: ToString>(value: &Option<T>) -> String {
            value.as_ref().map_or_else(|| "none".to_string(), |value| value.to_string())
        }

        writeln!(f, "Seed: {}", optional(&self.seed))?;
        writeln!(f, "Time limit: {}", optional(&self.time_limit))?;
        writeln!(f, "Iterations limit: {}", optional(&self.iteration_limit))?;
        writeln!(f, "Maximum number of solutions: {}", self.capacity)?;
        writeln!(f, "Number of generations: {}", self.generations)?;
        writeln!(f, "Solutions obtained: {}", self.solutions)?;
        writeln!(f, "Solving time: {}", self.solving_time)?;
        writeln!(f, "Number of snapshots: {}", self.snapshots)?;
        writeln!(f, "Population size: {}", optional(&self.population_size))
    }
}

/// A result of a single run.
pub struct SolverResult {
    /// Final archive members.
    pub individuals: Vec<Individual>,
    /// Captured archive snapshots in capture order, the final one is the last.
    pub snapshots: Vec<Snapshot>,
    /// Objective vectors of the optimizer population captured together with archive snapshots.
    pub populations: Vec<Snapshot>,
    /// Amount of non-dominated population members captured together with archive snapshots.
    pub non_dominated: Vec<NonDominatedCount>,
    /// Run statistics.
    pub statistics: RunStatistics,
}

/// Runs an optimizer until termination. Use [`Builder`] to create an instance.
pub struct Solver {
    adapter: Box<dyn OptimizerAdapter>,
    config: ObjectiveConfig,
    capacity: usize,
    max_snapshots: usize,
    time_limit: Option<Float>,
    iteration_limit: Option<usize>,
    termination: Box<dyn Termination + Send + Sync>,
    quota: Option<Arc<dyn Quota + Send + Sync>>,
    telemetry: TelemetryMode,
}

impl Solver {
    /// Runs the drive loop and returns the final archive, captured snapshots and run statistics.
    pub fn solve(self) -> GenericResult<SolverResult> {
        let Solver {
            mut adapter,
            config,
            capacity,
            max_snapshots,
            time_limit,
            iteration_limit,
            termination,
            quota,
            telemetry,
        } = self;

        let telemetry = Telemetry::new(telemetry);
        let timer = Timer::start();

        let mut archive = Archive::new(config, capacity);
        let mut scheduler = SnapshotScheduler::new(max_snapshots, time_limit, iteration_limit);
        let mut snapshots = RunSnapshots::default();
        let mut progress = RunProgress::default();

        archive.update(validate_individuals(archive.config(), adapter.current_individuals())?);

        if scheduler.on_start() {
            progress.elapsed = timer.elapsed_secs_as_float();
            snapshots.capture(&archive, adapter.as_ref(), &telemetry, progress.generation, progress.elapsed);
            scheduler.on_captured(progress.generation, progress.elapsed);
        }

        loop {
            progress.elapsed = timer.elapsed_secs_as_float();

            let is_interrupted = quota.as_ref().is_some_and(|quota| quota.is_reached());
            if is_interrupted || termination.is_termination(&progress) {
                break;
            }

            progress.generation += 1;
            archive.update(validate_individuals(archive.config(), adapter.evolve())?);
            progress.elapsed = timer.elapsed_secs_as_float();

            if scheduler.is_due(progress.generation, progress.elapsed) {
                snapshots.capture(&archive, adapter.as_ref(), &telemetry, progress.generation, progress.elapsed);
                scheduler.on_captured(progress.generation, progress.elapsed);
            }

            telemetry.on_generation(
                progress.generation,
                termination.estimate(&progress),
                archive.size(),
                scheduler.num_snapshots(),
            );
        }

        if scheduler.on_termination(progress.generation) {
            let elapsed = timer.elapsed_secs_as_float();
            snapshots.capture(&archive, adapter.as_ref(), &telemetry, progress.generation, elapsed);
        }

        let statistics = RunStatistics {
            seed: adapter.seed(),
            time_limit,
            iteration_limit,
            capacity,
            generations: progress.generation,
            solutions: archive.size(),
            solving_time: timer.elapsed_secs_as_float(),
            snapshots: snapshots.archive.len(),
            population_size: adapter.population_size(),
        };

        telemetry.on_result(&statistics);

        Ok(SolverResult {
            individuals: archive.into_individuals(),
            snapshots: snapshots.archive,
            populations: snapshots.populations,
            non_dominated: snapshots.non_dominated,
            statistics,
        })
    }
}

/// Keeps archive and population state captured at the same snapshot times.
#[derive(Default)]
struct RunSnapshots {
    archive: Vec<Snapshot>,
    populations: Vec<Snapshot>,
    non_dominated: Vec<NonDominatedCount>,
}

impl RunSnapshots {
    fn capture(
        &mut self,
        archive: &Archive,
        adapter: &dyn OptimizerAdapter,
        telemetry: &Telemetry,
        iteration: usize,
        elapsed: Float,
    ) {
        let population = adapter
            .current_individuals()
            .iter()
            .map(|individual| individual.objectives().to_vec())
            .collect::<Vec<_>>();
        let count = non_dominated_sort(population.as_slice(), |a, b| archive.config().dominance_order(a, b)).len();

        let snapshot = archive.snapshot(iteration, elapsed);
        telemetry.on_snapshot(&snapshot);

        self.archive.push(snapshot);
        self.populations.push(Snapshot::new(iteration, elapsed, population));
        self.non_dominated.push(NonDominatedCount { iteration, elapsed, count });
    }
}

fn validate_individuals(config: &ObjectiveConfig, individuals: Vec<Individual>) -> GenericResult<Vec<Individual>> {
    let dimension = config.dimension();

    match individuals.iter().find(|individual| individual.objectives().len() != dimension) {
        Some(individual) => Err(format!(
            "expected {dimension} objectives, got {}: {:?}",
            individual.objectives().len(),
            individual.objectives()
        )
        .into()),
        None => Ok(individuals),
    }
}
