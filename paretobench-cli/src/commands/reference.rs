#[cfg(test)]
#[path = "../../tests/unit/commands/reference_test.rs"]
mod reference_test;

use super::*;
use clap::Command;
use paretobench::format::write_front;
use paretobench::reference::build_reference_front;

const PARETO_ARG_NAME: &str = "pareto";
const SNAPSHOTS_ARG_NAME: &str = "snapshots";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_reference_app() -> Command {
    Command::new("reference")
        .about("Builds a reference front by merging Pareto fronts of many runs")
        .arg(create_paths_arg(PARETO_ARG_NAME, "Specifies paths to Pareto front files of runs", true))
        .arg(create_paths_arg(SNAPSHOTS_ARG_NAME, "Specifies snapshot path prefixes of runs", false))
        .arg(create_path_arg(OUT_RESULT_ARG_NAME, "Specifies path to the file for reference front output", true))
        .arg(create_senses_arg())
}

/// Runs reference front command.
pub fn run_reference(matches: &ArgMatches) -> Result<(), String> {
    let fronts = read_fronts(get_paths(matches, PARETO_ARG_NAME).unwrap_or_default().as_slice())?;
    let snapshots = read_snapshot_series(get_paths(matches, SNAPSHOTS_ARG_NAME).unwrap_or_default().as_slice())?;

    let all_fronts = || {
        fronts
            .iter()
            .map(|front| front.as_slice())
            .chain(snapshots.iter().flat_map(|series| series.iter().map(|snapshot| snapshot.front())))
    };

    let config = get_objective_config(matches, all_fronts())?;
    let reference_front = build_reference_front(&config, all_fronts());

    let out_path = get_path(matches, OUT_RESULT_ARG_NAME).ok_or_else(|| "output path is not specified".to_string())?;

    write_front(&out_path, reference_front.as_slice()).map_err(String::from)
}
