//! Solver configuration.

#![allow(missing_docs)]

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use paretobench::example::{EvolutionaryAdapter, OptimalAdapter, Zdt, ZdtProblem};
use paretobench::solver::{Builder, TelemetryMode};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A default population size of evolutionary algorithm.
pub const DEFAULT_POPULATION_SIZE: usize = 200;

/// A default amount of samples taken by the optimal algorithm.
pub const DEFAULT_OPTIMAL_SIZE: usize = 100;

/// A default frequency (in generations) of progress logging.
pub const DEFAULT_LOG_EVERY: usize = 100;

/// A solver run configuration.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Config {
    /// Specifies benchmark problem.
    pub problem: Option<ProblemConfig>,
    /// Specifies algorithm and its parameters.
    pub algorithm: Option<AlgorithmType>,
    /// Specifies archive configuration.
    pub archive: Option<ArchiveConfig>,
    /// Specifies termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies snapshot configuration.
    pub snapshots: Option<SnapshotsConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A benchmark problem configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProblemConfig {
    /// A problem name: zdt1, zdt2, zdt3, zdt4 or zdt6.
    pub name: String,
    /// Amount of decision variables. Default is 30 for zdt1-3 and 10 for zdt4 and zdt6.
    pub dimension: Option<usize>,
}

/// An algorithm configuration.
#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum AlgorithmType {
    /// An evolutionary algorithm with NSGA-II survivor selection.
    #[serde(rename(deserialize = "evolutionary"))]
    #[serde(rename_all = "camelCase")]
    Evolutionary {
        /// Population size. Default is 200.
        population_size: Option<usize>,
        /// Random seed. Default is none (seeded from entropy).
        seed: Option<u64>,
        /// Crossover probability. Default is 0.9.
        crossover_probability: Option<f64>,
        /// Mutation probability of a single variable. Default is one divided by problem dimension.
        mutation_probability: Option<f64>,
    },

    /// Samples the true Pareto set, no evolution happens.
    #[serde(rename(deserialize = "optimal"))]
    #[serde(rename_all = "camelCase")]
    Optimal {
        /// Amount of samples. Default is 100.
        size: Option<usize>,
    },
}

/// An archive configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveConfig {
    /// Maximum amount of solutions kept. Default is no limit.
    pub capacity: Option<usize>,
}

/// A termination configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max time in seconds, fractions are allowed.
    pub max_time: Option<f64>,
    /// Max amount of generations.
    pub max_generations: Option<usize>,
}

/// A snapshot configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotsConfig {
    /// Maximum amount of snapshots including the final one. Default is 0.
    pub max_snapshots: Option<usize>,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Specifies how often generation progress is logged. Default is 100 (generations).
    pub log_every: Option<usize>,
}

fn configure_from_archive(builder: Builder, archive_config: &Option<ArchiveConfig>) -> Result<Builder, String> {
    match archive_config.as_ref().and_then(|config| config.capacity) {
        Some(0) => Err("archive capacity must be greater than zero".to_string()),
        capacity => Ok(builder.with_capacity(capacity)),
    }
}

fn configure_from_termination(
    mut builder: Builder,
    termination_config: &Option<TerminationConfig>,
) -> Result<Builder, String> {
    if let Some(config) = termination_config {
        builder = builder.with_max_time(config.max_time);
        builder = builder.with_max_generations(config.max_generations);
    }

    Ok(builder)
}

fn configure_from_snapshots(builder: Builder, snapshots_config: &Option<SnapshotsConfig>) -> Result<Builder, String> {
    let max_snapshots = snapshots_config.as_ref().and_then(|config| config.max_snapshots).unwrap_or(0);

    Ok(builder.with_max_snapshots(max_snapshots))
}

fn configure_from_telemetry(builder: Builder, telemetry_config: &Option<TelemetryConfig>) -> Result<Builder, String> {
    let telemetry = match telemetry_config.as_ref().and_then(|config| config.logging.as_ref()) {
        Some(LoggingConfig { enabled, log_every }) if *enabled => TelemetryMode::OnlyLogging {
            logger: Arc::new(|msg: &str| println!("{msg}")),
            log_every: log_every.unwrap_or(DEFAULT_LOG_EVERY),
        },
        _ => TelemetryMode::None,
    };

    Ok(builder.with_telemetry(telemetry))
}

/// Sets the adapter. Optimal algorithm has nothing to evolve, so the run stops right after start.
fn configure_from_algorithm(
    builder: Builder,
    algorithm_config: &Option<AlgorithmType>,
    problem: Zdt,
) -> Result<Builder, String> {
    let check_probability = |probability: Option<f64>, name: &str| match probability {
        Some(value) if !(0. ..=1.).contains(&value) => Err(format!("{name} probability must be in [0, 1], got {value}")),
        _ => Ok(()),
    };

    match algorithm_config {
        Some(AlgorithmType::Optimal { size }) => {
            let size = size.unwrap_or(DEFAULT_OPTIMAL_SIZE);
            if size == 0 {
                return Err("optimal sample size must be greater than zero".to_string());
            }

            Ok(builder
                .with_adapter(Box::new(OptimalAdapter::new(&problem, size)))
                .with_max_time(None)
                .with_max_generations(Some(0)))
        }
        Some(AlgorithmType::Evolutionary { population_size, seed, crossover_probability, mutation_probability }) => {
            let population_size = population_size.unwrap_or(DEFAULT_POPULATION_SIZE);
            if population_size < 2 {
                return Err("population size must be greater than one".to_string());
            }

            check_probability(*crossover_probability, "crossover")?;
            check_probability(*mutation_probability, "mutation")?;

            let mut adapter = EvolutionaryAdapter::new(problem, population_size, *seed);
            if let Some(probability) = crossover_probability {
                adapter = adapter.with_crossover_probability(*probability);
            }
            if let Some(probability) = mutation_probability {
                adapter = adapter.with_mutation_probability(*probability);
            }

            Ok(builder.with_adapter(Box::new(adapter)))
        }
        None => Ok(builder.with_adapter(Box::new(EvolutionaryAdapter::new(problem, DEFAULT_POPULATION_SIZE, None)))),
    }
}

/// Creates a problem instance from the configuration.
pub fn create_problem_from_config(config: &Config) -> Result<Zdt, String> {
    let problem_config = config.problem.as_ref().ok_or_else(|| "problem is not specified".to_string())?;
    let problem = problem_config.name.parse::<ZdtProblem>().map_err(|err| err.to_string())?;

    match problem_config.dimension.unwrap_or_else(|| problem.default_dimension()) {
        dimension if dimension < 2 => Err(format!("problem dimension must be at least two, got {dimension}")),
        dimension => Ok(problem.with_dimension(dimension)),
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates a solver `Builder` from config.
pub fn create_builder_from_config(config: &Config) -> Result<Builder, String> {
    let problem = create_problem_from_config(config)?;

    let builder = Builder::default().with_config(problem.config());
    let builder = configure_from_telemetry(builder, &config.telemetry)?;
    let builder = configure_from_termination(builder, &config.termination)?;
    let builder = configure_from_archive(builder, &config.archive)?;
    let builder = configure_from_snapshots(builder, &config.snapshots)?;
    let builder = configure_from_algorithm(builder, &config.algorithm, problem)?;

    Ok(builder)
}

/// Creates a solver `Builder` from config file.
pub fn create_builder_from_config_file<R: Read>(reader: BufReader<R>) -> Result<Builder, String> {
    read_config(reader).and_then(|config| create_builder_from_config(&config))
}
