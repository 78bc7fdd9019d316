use clap::{Arg, ArgAction, ArgMatches};

pub mod aggregate;
pub mod evaluate;
pub mod reference;
pub mod solve;

use paretobench::format::{read_front, read_snapshots};
use paretobench::models::{ObjectiveConfig, Point, Sense};
use paretobench::snapshots::Snapshot;
use std::path::PathBuf;
use std::str::FromStr;

const SENSES_ARG_NAME: &str = "senses";

fn create_senses_arg() -> Arg {
    Arg::new(SENSES_ARG_NAME)
        .help("Specifies comma separated objective senses: 'min' or 'max'. Default is minimization of all objectives")
        .long(SENSES_ARG_NAME)
        .required(false)
        .num_args(1)
}

fn create_paths_arg(name: &'static str, help: &'static str, required: bool) -> Arg {
    Arg::new(name).help(help).long(name).required(required).num_args(1..).action(ArgAction::Append)
}

fn create_path_arg(name: &'static str, help: &'static str, required: bool) -> Arg {
    Arg::new(name).help(help).long(name).required(required).num_args(1)
}

fn get_path(matches: &ArgMatches, arg_name: &str) -> Option<PathBuf> {
    matches.get_one::<String>(arg_name).map(PathBuf::from)
}

fn get_paths(matches: &ArgMatches, arg_name: &str) -> Option<Vec<PathBuf>> {
    matches.get_many::<String>(arg_name).map(|paths| paths.map(PathBuf::from).collect())
}

/// Returns paths given per run: their amount must match the amount of runs.
fn get_run_paths(matches: &ArgMatches, arg_name: &str, runs: usize) -> Result<Option<Vec<PathBuf>>, String> {
    match get_paths(matches, arg_name) {
        Some(paths) if paths.len() != runs => {
            Err(format!("expected {runs} values of '--{arg_name}' (one per run), got {}", paths.len()))
        }
        paths => Ok(paths),
    }
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn read_fronts(paths: &[PathBuf]) -> Result<Vec<Vec<Point>>, String> {
    paths.iter().map(|path| read_front(path).map_err(String::from)).collect()
}

fn read_snapshot_series(prefixes: &[PathBuf]) -> Result<Vec<Vec<Snapshot>>, String> {
    prefixes.iter().map(|prefix| read_snapshots(prefix).map_err(String::from)).collect()
}

/// Creates objective config from `--senses` argument or, when it is absent, minimizes every
/// objective of the first non-empty front.
fn get_objective_config<'a, I>(matches: &ArgMatches, fronts: I) -> Result<ObjectiveConfig, String>
where
    I: IntoIterator<Item = &'a [Point]>,
{
    match matches.get_one::<String>(SENSES_ARG_NAME) {
        Some(senses) => {
            let senses = senses
                .split(',')
                .map(|sense| match sense.trim() {
                    "min" => Ok(Sense::Minimize),
                    "max" => Ok(Sense::Maximize),
                    other => Err(format!("unknown objective sense: '{other}'")),
                })
                .collect::<Result<Vec<_>, _>>()?;

            ObjectiveConfig::new(senses).map_err(String::from)
        }
        None => fronts
            .into_iter()
            .flat_map(|front| front.first())
            .map(|point| point.len())
            .find(|&dimension| dimension > 0)
            .map(ObjectiveConfig::minimize)
            .ok_or_else(|| "cannot detect amount of objectives: all fronts are empty".to_string()),
    }
}
