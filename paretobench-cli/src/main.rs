//! A command line interface to run, evaluate and aggregate multi-objective solver experiments.

mod commands;

use crate::commands::aggregate::{get_aggregate_app, run_aggregate};
use crate::commands::evaluate::{get_evaluate_app, run_evaluate};
use crate::commands::reference::{get_reference_app, run_reference};
use crate::commands::solve::{get_solve_app, run_solve};
use clap::Command;
use paretobench_cli::extensions::solve::interruption::create_interruption_quota;
use std::process;

fn main() {
    let matches = Command::new("Multi-objective solver benchmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs solvers on benchmark problems, scores their Pareto fronts and aggregates results of many runs")
        .subcommand(get_solve_app())
        .subcommand(get_reference_app())
        .subcommand(get_evaluate_app())
        .subcommand(get_aggregate_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_interruption_quota),
        Some(("reference", reference_matches)) => run_reference(reference_matches),
        Some(("evaluate", evaluate_matches)) => run_evaluate(evaluate_matches),
        Some(("aggregate", aggregate_matches)) => run_aggregate(aggregate_matches),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
