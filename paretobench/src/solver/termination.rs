//! The termination module contains logic which defines when the drive loop stops asking
//! an optimizer for new individuals.

#[cfg(test)]
#[path = "../../tests/unit/solver/termination_test.rs"]
mod termination_test;

use crate::utils::{Float, compare_floats_refs};

/// Keeps progress of a single run as seen by termination criteria.
#[derive(Clone, Debug, Default)]
pub struct RunProgress {
    /// Amount of completed generations.
    pub generation: usize,
    /// Elapsed time in seconds.
    pub elapsed: Float,
}

/// A trait which specifies criteria when a run should stop.
pub trait Termination {
    /// Returns true if termination condition is met.
    fn is_termination(&self, progress: &RunProgress) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, progress: &RunProgress) -> Float;
}

/// A termination criteria which is in terminated state when max time elapsed.
pub struct MaxTime {
    limit_in_secs: Float,
}

impl MaxTime {
    /// Creates a new instance of `MaxTime`.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { limit_in_secs }
    }
}

impl Termination for MaxTime {
    fn is_termination(&self, progress: &RunProgress) -> bool {
        progress.elapsed >= self.limit_in_secs
    }

    fn estimate(&self, progress: &RunProgress) -> Float {
        if self.limit_in_secs > 0. { (progress.elapsed / self.limit_in_secs).min(1.) } else { 1. }
    }
}

/// A termination criteria which is in terminated state when maximum amount of generations is reached.
pub struct MaxGeneration {
    limit: usize,
}

impl MaxGeneration {
    /// Creates a new instance of `MaxGeneration`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for MaxGeneration {
    fn is_termination(&self, progress: &RunProgress) -> bool {
        progress.generation >= self.limit
    }

    fn estimate(&self, progress: &RunProgress) -> Float {
        if self.limit > 0 { (progress.generation as Float / self.limit as Float).min(1.) } else { 1. }
    }
}

/// Encapsulates multiple termination criteria: terminates when any of them does.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination + Send + Sync>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination + Send + Sync>>) -> Self {
        Self { terminations }
    }
}

impl Termination for CompositeTermination {
    fn is_termination(&self, progress: &RunProgress) -> bool {
        self.terminations.iter().any(|t| t.is_termination(progress))
    }

    fn estimate(&self, progress: &RunProgress) -> Float {
        self.terminations.iter().map(|t| t.estimate(progress)).max_by(compare_floats_refs).unwrap_or(0.)
    }
}
