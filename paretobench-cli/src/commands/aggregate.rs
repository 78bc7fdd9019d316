#[cfg(test)]
#[path = "../../tests/unit/commands/aggregate_test.rs"]
mod aggregate_test;

use super::*;
use clap::Command;
use paretobench::aggregation::{Artifact, RunRanking, Summary, forward_artifacts};
use paretobench::format::{read_scalar, write_summary, write_values};
use paretobench::utils::Float;

const HYPERVOLUME_ARG_NAME: &str = "hypervolume";
const IGD_PLUS_ARG_NAME: &str = "igd-plus";
const EPSILON_ARG_NAME: &str = "epsilon";

const OUT_VALUES_PREFIX_ARG_NAME: &str = "out-values-prefix";
const OUT_STATISTICS_PREFIX_ARG_NAME: &str = "out-statistics-prefix";
const OUT_DIR_ARG_NAME: &str = "out-dir";

const FILE_ARTIFACTS: &[&str] =
    &["statistics", "pareto", "solutions", "hypervolume-series", "igd-plus-series", "epsilon-series", "non-dominated"];
const SEQUENCE_ARTIFACTS: &[&str] = &["snapshots", "populations"];

pub fn get_aggregate_app() -> Command {
    let command = Command::new("aggregate")
        .about("Summarizes indicator values of many runs and forwards artifacts of the best and the median runs")
        .arg(create_paths_arg(HYPERVOLUME_ARG_NAME, "Specifies hypervolume value files of runs", true))
        .arg(create_paths_arg(IGD_PLUS_ARG_NAME, "Specifies IGD+ value files of runs", false))
        .arg(create_paths_arg(EPSILON_ARG_NAME, "Specifies epsilon value files of runs", false))
        .arg(create_path_arg(
            OUT_VALUES_PREFIX_ARG_NAME,
            "Specifies path prefix of files with all values of a metric: '<prefix><metric>.txt'",
            false,
        ))
        .arg(create_path_arg(
            OUT_STATISTICS_PREFIX_ARG_NAME,
            "Specifies path prefix of files with mean and standard deviation of a metric: '<prefix><metric>.txt'",
            false,
        ))
        .arg(create_path_arg(OUT_DIR_ARG_NAME, "Specifies directory for artifacts of the best and the median runs", false));

    let command = FILE_ARTIFACTS.iter().fold(command, |command, &name| {
        command.arg(create_paths_arg(name, "Specifies per run artifact files to forward", false).requires(OUT_DIR_ARG_NAME))
    });

    SEQUENCE_ARTIFACTS.iter().fold(command, |command, &name| {
        command.arg(
            create_paths_arg(name, "Specifies per run artifact path prefixes to forward", false).requires(OUT_DIR_ARG_NAME),
        )
    })
}

/// Runs aggregation command.
pub fn run_aggregate(matches: &ArgMatches) -> Result<(), String> {
    let hypervolumes = read_values(get_paths(matches, HYPERVOLUME_ARG_NAME).unwrap_or_default().as_slice())?;
    let runs = hypervolumes.len();

    let ranking = RunRanking::new(hypervolumes.as_slice()).ok_or_else(|| "no runs to aggregate".to_string())?;
    println!("best run: {}, median run: {}", ranking.best, ranking.median);

    let mut metrics = vec![(HYPERVOLUME_ARG_NAME, hypervolumes)];
    for name in [IGD_PLUS_ARG_NAME, EPSILON_ARG_NAME] {
        if let Some(paths) = get_run_paths(matches, name, runs)? {
            metrics.push((name, read_values(paths.as_slice())?));
        }
    }

    write_metrics(matches, metrics.as_slice())?;

    let artifacts = get_artifacts(matches, runs)?;
    if let Some(out_dir) = get_path(matches, OUT_DIR_ARG_NAME) {
        std::fs::create_dir_all(&out_dir)
            .map_err(|err| format!("cannot create output directory '{}': '{err}'", out_dir.display()))?;

        forward_artifacts(&ranking, artifacts.as_slice(), &out_dir).map_err(String::from)?;
    }

    Ok(())
}

fn read_values(paths: &[PathBuf]) -> Result<Vec<Float>, String> {
    paths.iter().map(|path| read_scalar(path).map_err(String::from)).collect()
}

fn write_metrics(matches: &ArgMatches, metrics: &[(&str, Vec<Float>)]) -> Result<(), String> {
    let get_metric_path = |arg_name: &str, metric: &str| {
        get_path(matches, arg_name).map(|prefix| {
            let mut path = prefix.into_os_string();
            path.push(format!("{metric}.txt"));
            PathBuf::from(path)
        })
    };

    metrics.iter().try_for_each(|(metric, values)| {
        if let Some(path) = get_metric_path(OUT_VALUES_PREFIX_ARG_NAME, metric) {
            write_values(&path, values.as_slice())?;
        }

        if let Some(path) = get_metric_path(OUT_STATISTICS_PREFIX_ARG_NAME, metric) {
            write_summary(&path, &Summary::new(values.as_slice()))?;
        }

        Ok(())
    })
}

fn get_artifacts(matches: &ArgMatches, runs: usize) -> Result<Vec<Artifact>, String> {
    let files = FILE_ARTIFACTS.iter().map(|&name| (name, false));
    let sequences = SEQUENCE_ARTIFACTS.iter().map(|&name| (name, true));

    files
        .chain(sequences)
        .filter_map(|(name, is_sequence)| match get_run_paths(matches, name, runs) {
            Ok(Some(paths)) if is_sequence => Some(Ok(Artifact::sequences(name, paths))),
            Ok(Some(paths)) => Some(Ok(Artifact::files(name, paths))),
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        })
        .collect()
}
