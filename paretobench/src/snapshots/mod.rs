//! This module contains snapshot related functionality: an immutable copy of archive state and
//! a scheduler which decides when such copies are taken.
//!
//! Snapshots are distributed geometrically over the run budget: the gap between two consecutive
//! snapshots grows with the number of captured ones, so the early phase of a run, where the front
//! changes rapidly, is sampled more densely than the late one. The last slot is always reserved
//! for the final snapshot captured on termination.

#[cfg(test)]
#[path = "../../tests/unit/snapshots/snapshots_test.rs"]
mod snapshots_test;

use crate::models::Point;
use crate::utils::Float;

/// A minimal time base (in seconds) used when the initial snapshot is taken at (almost) zero elapsed time.
const MIN_TIME_BASE: Float = 1E-3;

/// A point-in-time copy of archive objective vectors.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    iteration: usize,
    elapsed: Float,
    front: Vec<Point>,
}

impl Snapshot {
    /// Creates a new instance of `Snapshot`.
    pub fn new(iteration: usize, elapsed: Float, front: Vec<Point>) -> Self {
        Self { iteration, elapsed, front }
    }

    /// Returns iteration (generation) when snapshot was taken.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Returns elapsed time in seconds when snapshot was taken.
    pub fn elapsed(&self) -> Float {
        self.elapsed
    }

    /// Returns captured objective vectors.
    pub fn front(&self) -> &[Point] {
        self.front.as_slice()
    }
}

/// An amount of mutually non-dominated individuals in the optimizer population at snapshot time.
#[derive(Clone, Debug, PartialEq)]
pub struct NonDominatedCount {
    /// Iteration (generation) when snapshot was taken.
    pub iteration: usize,
    /// Elapsed time in seconds when snapshot was taken.
    pub elapsed: Float,
    /// Size of the first front of the population.
    pub count: usize,
}

/// Decides at which iterations or elapsed times archive snapshots are captured.
#[derive(Clone, Debug)]
pub struct SnapshotScheduler {
    max_snapshots: usize,
    time_limit: Option<Float>,
    iteration_limit: Option<usize>,

    num_snapshots: usize,
    time_last_snapshot: Float,
    iteration_last_snapshot: usize,
    time_next_snapshot: Option<Float>,
    iteration_next_snapshot: Option<usize>,
    time_factor: Float,
    iteration_factor: Float,
}

impl SnapshotScheduler {
    /// Creates a new instance of `SnapshotScheduler`. Time and iteration limits are the run
    /// budgets: when one is missing, the corresponding axis is not used for scheduling.
    pub fn new(max_snapshots: usize, time_limit: Option<Float>, iteration_limit: Option<usize>) -> Self {
        Self {
            max_snapshots,
            time_limit: time_limit.filter(|&limit| limit > 0.),
            iteration_limit: iteration_limit.filter(|&limit| limit > 0),
            num_snapshots: 0,
            time_last_snapshot: 0.,
            iteration_last_snapshot: 0,
            time_next_snapshot: None,
            iteration_next_snapshot: None,
            time_factor: 1.,
            iteration_factor: 1.,
        }
    }

    /// Returns true if the initial snapshot has to be captured at the start of the run.
    pub fn on_start(&self) -> bool {
        self.num_snapshots == 0 && self.has_free_slot()
    }

    /// Returns true if a snapshot has to be captured after given iteration.
    pub fn is_due(&self, iteration: usize, elapsed: Float) -> bool {
        if !self.has_free_slot() {
            return false;
        }

        let is_iteration_due = self.iteration_next_snapshot.is_some_and(|next| iteration >= next);
        let is_time_due = self.time_next_snapshot.is_some_and(|next| elapsed >= next);

        is_iteration_due || is_time_due
    }

    /// Registers a captured (not final) snapshot and schedules the next one.
    pub fn on_captured(&mut self, iteration: usize, elapsed: Float) {
        let is_initial = self.num_snapshots == 0;

        self.num_snapshots += 1;
        self.iteration_last_snapshot = iteration;
        self.time_last_snapshot = elapsed;

        if is_initial {
            // the first gap is derived from the whole budget
            self.refresh_factors();
            self.schedule_next();
        } else {
            self.schedule_next();
            self.refresh_factors();
        }
    }

    /// Registers the final snapshot after given iteration. Returns true if it has to be captured.
    /// A snapshot already captured at the same iteration is not repeated.
    pub fn on_termination(&mut self, iteration: usize) -> bool {
        let is_captured = self.num_snapshots > 0 && self.iteration_last_snapshot == iteration;

        if self.max_snapshots > 0 && !is_captured {
            self.num_snapshots += 1;
            self.time_next_snapshot = None;
            self.iteration_next_snapshot = None;
            true
        } else {
            false
        }
    }

    /// Returns amount of registered snapshots.
    pub fn num_snapshots(&self) -> usize {
        self.num_snapshots
    }

    /// Returns maximum amount of snapshots.
    pub fn max_snapshots(&self) -> usize {
        self.max_snapshots
    }

    /// Returns the next scheduled iteration, if any.
    pub fn next_iteration(&self) -> Option<usize> {
        self.iteration_next_snapshot
    }

    /// Returns the next scheduled elapsed time, if any.
    pub fn next_time(&self) -> Option<Float> {
        self.time_next_snapshot
    }

    /// Mid-run snapshots are allowed only while the final one still fits.
    fn has_free_slot(&self) -> bool {
        self.max_snapshots > self.num_snapshots + 1
    }

    fn refresh_factors(&mut self) {
        let remaining = self.max_snapshots.saturating_sub(self.num_snapshots).max(1) as Float;

        self.time_factor = self
            .time_limit
            .map_or(1., |limit| (limit / self.time_last_snapshot.max(MIN_TIME_BASE)).powf(1. / remaining));

        self.iteration_factor = self
            .iteration_limit
            .map_or(1., |limit| (limit as Float / (self.iteration_last_snapshot as Float + 1.)).powf(1. / remaining));
    }

    fn schedule_next(&mut self) {
        self.time_next_snapshot = self.time_limit.map(|_| self.time_last_snapshot.max(MIN_TIME_BASE) * self.time_factor);

        self.iteration_next_snapshot = self.iteration_limit.map(|_| {
            let next = ((self.iteration_last_snapshot as Float + 1.) * self.iteration_factor).round() as usize;
            next.max(self.iteration_last_snapshot + 1)
        });
    }
}
