#[cfg(test)]
#[path = "../../tests/unit/commands/evaluate_test.rs"]
mod evaluate_test;

use super::*;
use clap::Command;
use paretobench::format::{write_scalar, write_series};
use paretobench::indicators::{IndicatorEngine, IndicatorKind, RunFronts, RunScores};

const INDICATOR_ARG_NAME: &str = "indicator";
const REFERENCE_ARG_NAME: &str = "reference";
const PARETO_ARG_NAME: &str = "pareto";
const SNAPSHOTS_ARG_NAME: &str = "snapshots";
const POPULATIONS_ARG_NAME: &str = "populations";
const OUT_VALUE_ARG_NAME: &str = "out-value";
const OUT_SERIES_ARG_NAME: &str = "out-series";

pub fn get_evaluate_app() -> Command {
    Command::new("evaluate")
        .about("Scores Pareto fronts and snapshot series of runs against a reference front")
        .arg(
            Arg::new(INDICATOR_ARG_NAME)
                .help("Specifies quality indicator")
                .short('i')
                .long(INDICATOR_ARG_NAME)
                .required(true)
                .value_parser(["hypervolume", "igd-plus", "normalized-igd-plus", "epsilon"]),
        )
        .arg(create_path_arg(REFERENCE_ARG_NAME, "Specifies path to the reference front file", true))
        .arg(create_paths_arg(PARETO_ARG_NAME, "Specifies paths to Pareto front files of runs", true))
        .arg(create_paths_arg(SNAPSHOTS_ARG_NAME, "Specifies snapshot path prefixes of runs", false))
        .arg(create_paths_arg(
            POPULATIONS_ARG_NAME,
            "Specifies population snapshot path prefixes of runs, used only to widen hypervolume reference point",
            false,
        ))
        .arg(create_paths_arg(
            OUT_VALUE_ARG_NAME,
            "Specifies paths to files for indicator values of runs, values are printed when omitted",
            false,
        ))
        .arg(
            create_paths_arg(OUT_SERIES_ARG_NAME, "Specifies paths to files for indicator series of runs", false)
                .requires(SNAPSHOTS_ARG_NAME),
        )
        .arg(create_senses_arg())
}

/// Runs evaluation command.
pub fn run_evaluate(matches: &ArgMatches) -> Result<(), String> {
    let kind = matches
        .get_one::<String>(INDICATOR_ARG_NAME)
        .ok_or_else(|| "indicator is not specified".to_string())
        .and_then(|name| name.parse::<IndicatorKind>())?;

    let reference_path =
        get_path(matches, REFERENCE_ARG_NAME).ok_or_else(|| "reference front is not specified".to_string())?;
    let reference_front = read_front(&reference_path).map_err(String::from)?;

    let fronts = read_fronts(get_paths(matches, PARETO_ARG_NAME).unwrap_or_default().as_slice())?;
    let runs = fronts.len();

    let snapshots = match get_run_paths(matches, SNAPSHOTS_ARG_NAME, runs)? {
        Some(prefixes) => read_snapshot_series(prefixes.as_slice())?,
        None => vec![Vec::new(); runs],
    };

    let populations = match get_run_paths(matches, POPULATIONS_ARG_NAME, runs)? {
        Some(prefixes) => read_snapshot_series(prefixes.as_slice())?,
        None => vec![Vec::new(); runs],
    };

    let out_values = get_run_paths(matches, OUT_VALUE_ARG_NAME, runs)?;
    let out_series = get_run_paths(matches, OUT_SERIES_ARG_NAME, runs)?;

    let config = get_objective_config(
        matches,
        std::iter::once(reference_front.as_slice()).chain(fronts.iter().map(|front| front.as_slice())),
    )?;

    let runs = fronts
        .into_iter()
        .zip(snapshots.into_iter().zip(populations))
        .map(|(front, (snapshots, populations))| RunFronts { front, snapshots, populations })
        .collect::<Vec<_>>();

    let scores =
        IndicatorEngine::new(config).evaluate(kind, reference_front.as_slice(), runs.as_slice()).map_err(String::from)?;

    write_scores(scores.as_slice(), out_values, out_series)
}

fn write_scores(
    scores: &[RunScores],
    out_values: Option<Vec<PathBuf>>,
    out_series: Option<Vec<PathBuf>>,
) -> Result<(), String> {
    match out_values {
        Some(paths) => scores.iter().zip(paths.iter()).try_for_each(|(score, path)| write_scalar(path, score.value))?,
        None => scores.iter().for_each(|score| println!("{}", score.value)),
    }

    if let Some(paths) = out_series {
        scores.iter().zip(paths.iter()).try_for_each(|(score, path)| write_series(path, score.snapshots.as_slice()))?;
    }

    Ok(())
}
