//! This module contains generic algorithms used by the archive, indicators and example solver.

pub mod geometry;
pub mod nsga2;
