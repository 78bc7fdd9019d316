#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::Command;
use paretobench::format::{write_counts, write_front, write_snapshots, write_solutions, write_text};
use paretobench::solver::SolverResult;
use paretobench::utils::Quota;
use paretobench_cli::extensions::solve::config::*;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

const PROBLEM_ARG_NAME: &str = "problem";
const DIMENSION_ARG_NAME: &str = "dimension";
const ALGORITHM_ARG_NAME: &str = "algorithm";
const SEED_ARG_NAME: &str = "seed";
const TIME_ARG_NAME: &str = "max-time";
const GENERATIONS_ARG_NAME: &str = "max-generations";
const CAPACITY_ARG_NAME: &str = "capacity";
const POPULATION_SIZE_ARG_NAME: &str = "population-size";
const SNAPSHOTS_LIMIT_ARG_NAME: &str = "max-snapshots";
const CONFIG_ARG_NAME: &str = "config";
const LOG_ARG_NAME: &str = "log";

const PARETO_ARG_NAME: &str = "pareto";
const SOLUTIONS_ARG_NAME: &str = "solutions";
const STATISTICS_ARG_NAME: &str = "statistics";
const SNAPSHOTS_ARG_NAME: &str = "snapshots";
const POPULATIONS_ARG_NAME: &str = "populations";
const NON_DOMINATED_ARG_NAME: &str = "non-dominated";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Runs a solver on a ZDT benchmark problem")
        .arg(
            Arg::new(PROBLEM_ARG_NAME)
                .help("Specifies the problem, can be omitted when set in the config")
                .short('p')
                .long(PROBLEM_ARG_NAME)
                .required(false)
                .value_parser(["zdt1", "zdt2", "zdt3", "zdt4", "zdt6"]),
        )
        .arg(
            Arg::new(DIMENSION_ARG_NAME)
                .help("Specifies amount of decision variables")
                .short('d')
                .long(DIMENSION_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ALGORITHM_ARG_NAME)
                .help("Specifies the algorithm")
                .short('a')
                .long(ALGORITHM_ARG_NAME)
                .required(false)
                .value_parser(["evolutionary", "optimal"]),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in seconds, fractions are allowed")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Specifies maximum number of generations")
                .short('n')
                .long(GENERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CAPACITY_ARG_NAME)
                .help("Specifies maximum amount of solutions kept in the archive")
                .long(CAPACITY_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(POPULATION_SIZE_ARG_NAME)
                .help("Specifies population size of evolutionary algorithm or sample size of optimal one")
                .long(POPULATION_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SNAPSHOTS_LIMIT_ARG_NAME)
                .help("Specifies maximum amount of archive snapshots including the final one")
                .long(SNAPSHOTS_LIMIT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file, command line arguments override its values")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(create_path_arg(PARETO_ARG_NAME, "Specifies path to the file for Pareto front output", false))
        .arg(create_path_arg(SOLUTIONS_ARG_NAME, "Specifies path to the file for decision vectors output", false))
        .arg(create_path_arg(STATISTICS_ARG_NAME, "Specifies path to the file for run statistics output", false))
        .arg(create_path_arg(
            SNAPSHOTS_ARG_NAME,
            "Specifies path prefix of snapshot files: '<prefix><index>.txt'",
            false,
        ))
        .arg(create_path_arg(
            POPULATIONS_ARG_NAME,
            "Specifies path prefix of population snapshot files: '<prefix><index>.txt'",
            false,
        ))
        .arg(create_path_arg(
            NON_DOMINATED_ARG_NAME,
            "Specifies path to the file for amounts of non-dominated population members per snapshot",
            false,
        ))
}

/// Runs solver command.
pub fn run_solve<F>(matches: &ArgMatches, quota_fn: F) -> Result<(), String>
where
    F: FnOnce() -> Result<Arc<dyn Quota + Send + Sync>, String>,
{
    let config = get_config(matches)?;

    let result = create_builder_from_config(&config)?
        .with_quota(Some(quota_fn()?))
        .build()
        .and_then(|solver| solver.solve())
        .map_err(|err| format!("cannot run solver: '{err}'"))?;

    write_result(matches, &result)
}

/// Reads config file if it is specified and applies command line arguments on top of it.
fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => {
            let file = File::open(path).map_err(|err| format!("cannot open config file '{path}': '{err}'"))?;
            read_config(BufReader::new(file))?
        }
        None => Config::default(),
    };

    let dimension = parse_int_value::<usize>(matches, DIMENSION_ARG_NAME, "dimension")?;
    match matches.get_one::<String>(PROBLEM_ARG_NAME) {
        Some(name) => config.problem = Some(ProblemConfig { name: name.clone(), dimension }),
        None => {
            if let Some(problem) = config.problem.as_mut() {
                problem.dimension = dimension.or(problem.dimension);
            }
        }
    }

    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;
    let population_size = parse_int_value::<usize>(matches, POPULATION_SIZE_ARG_NAME, "population size")?;
    let algorithm_name = matches.get_one::<String>(ALGORITHM_ARG_NAME).map(|name| name.as_str());

    let algorithm = match (algorithm_name, config.algorithm.take()) {
        (Some("optimal") | None, Some(AlgorithmType::Optimal { size })) => {
            AlgorithmType::Optimal { size: population_size.or(size) }
        }
        (Some("optimal"), _) => AlgorithmType::Optimal { size: population_size },
        (
            _,
            Some(AlgorithmType::Evolutionary {
                population_size: size,
                seed: config_seed,
                crossover_probability,
                mutation_probability,
            }),
        ) => {
            AlgorithmType::Evolutionary {
                population_size: population_size.or(size),
                seed: seed.or(config_seed),
                crossover_probability,
                mutation_probability,
            }
        }
        _ => AlgorithmType::Evolutionary { population_size, seed, crossover_probability: None, mutation_probability: None },
    };
    config.algorithm = Some(algorithm);

    let max_time = parse_float_value::<f64>(matches, TIME_ARG_NAME, "max time")?;
    let max_generations = parse_int_value::<usize>(matches, GENERATIONS_ARG_NAME, "max generations")?;
    if max_time.is_some() || max_generations.is_some() {
        config.termination = Some(TerminationConfig { max_time, max_generations });
    }

    if let Some(capacity) = parse_int_value::<usize>(matches, CAPACITY_ARG_NAME, "capacity")? {
        config.archive = Some(ArchiveConfig { capacity: Some(capacity) });
    }

    if let Some(max_snapshots) = parse_int_value::<usize>(matches, SNAPSHOTS_LIMIT_ARG_NAME, "max snapshots")? {
        config.snapshots = Some(SnapshotsConfig { max_snapshots: Some(max_snapshots) });
    }

    if matches.get_flag(LOG_ARG_NAME) {
        let log_every = config.telemetry.as_ref().and_then(|t| t.logging.as_ref()).and_then(|logging| logging.log_every);
        config.telemetry = Some(TelemetryConfig { logging: Some(LoggingConfig { enabled: true, log_every }) });
    }

    Ok(config)
}

fn write_result(matches: &ArgMatches, result: &SolverResult) -> Result<(), String> {
    if let Some(path) = get_path(matches, PARETO_ARG_NAME) {
        let front = result.individuals.iter().map(|individual| individual.objectives().to_vec()).collect::<Vec<_>>();
        write_front(&path, front.as_slice())?;
    }

    if let Some(path) = get_path(matches, SOLUTIONS_ARG_NAME) {
        write_solutions(&path, result.individuals.as_slice())?;
    }

    if let Some(path) = get_path(matches, STATISTICS_ARG_NAME) {
        write_text(&path, "statistics", result.statistics.to_string().as_str())?;
    }

    if let Some(prefix) = get_path(matches, SNAPSHOTS_ARG_NAME) {
        write_snapshots(&prefix, result.snapshots.as_slice())?;
    }

    if let Some(prefix) = get_path(matches, POPULATIONS_ARG_NAME) {
        write_snapshots(&prefix, result.populations.as_slice())?;
    }

    if let Some(path) = get_path(matches, NON_DOMINATED_ARG_NAME) {
        write_counts(&path, result.non_dominated.as_slice())?;
    }

    Ok(())
}
