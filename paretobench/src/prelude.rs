//! This module reimports a common used types.

pub use crate::models::Individual;
pub use crate::models::ObjectiveConfig;
pub use crate::models::Point;
pub use crate::models::Sense;

pub use crate::archive::Archive;
pub use crate::snapshots::NonDominatedCount;
pub use crate::snapshots::Snapshot;
pub use crate::snapshots::SnapshotScheduler;

pub use crate::indicators::IndicatorEngine;
pub use crate::indicators::IndicatorKind;
pub use crate::indicators::RunFronts;
pub use crate::indicators::RunScores;

pub use crate::aggregation::RunRanking;
pub use crate::aggregation::Summary;

pub use crate::solver::Builder;
pub use crate::solver::OptimizerAdapter;
pub use crate::solver::Solver;
pub use crate::solver::SolverResult;
pub use crate::solver::TelemetryMode;

pub use crate::utils::compare_floats;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Quota;
pub use crate::utils::Timer;
