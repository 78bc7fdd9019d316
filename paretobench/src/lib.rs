//! This crate exposes building blocks to evaluate and compare multi-objective metaheuristic
//! solvers on benchmark problems.
//!
//! # Overview
//!
//! - **archive**: a bounded set of mutually non-dominated individuals shared by every solver driver
//! - **snapshots**: a geometric schedule which decides when the archive state is captured
//! - **indicators**: hypervolume ratio, modified IGD+ and multiplicative epsilon quality indicators
//! - **aggregation**: ranks independent runs and forwards best and median run artifacts
//!
//! A solver is plugged in through [`solver::OptimizerAdapter`], the drive loop in [`solver`]
//! takes care of the archive, snapshots and termination.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod aggregation;
pub mod algorithms;
pub mod archive;
pub mod example;
pub mod format;
pub mod indicators;
pub mod models;
pub mod prelude;
pub mod reference;
pub mod snapshots;
pub mod solver;
pub mod utils;
