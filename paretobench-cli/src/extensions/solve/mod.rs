//! Contains functionality to configure and run a solver.

pub mod config;
pub mod interruption;
