//! This module contains a bounded archive of mutually non-dominated individuals.
//!
//! The archive is shared by every solver driver: each generation, a batch of candidates is merged
//! into it while keeping the following invariants:
//! - no member dominates another one (two objective test on the first and the last objective)
//! - no two members have equal objective vectors
//! - size never exceeds the configured capacity: extra members are removed using crowding distance

#[cfg(test)]
#[path = "../../tests/unit/archive/archive_test.rs"]
mod archive_test;

use crate::algorithms::nsga2::{assign_crowding_distance, non_dominated_sort};
use crate::models::{Individual, ObjectiveConfig, Point};
use crate::snapshots::Snapshot;
use crate::utils::{Float, compare_floats};

/// A bounded non-dominated solution archive.
pub struct Archive {
    config: ObjectiveConfig,
    capacity: usize,
    individuals: Vec<Individual>,
}

impl Archive {
    /// Creates a new empty archive with given capacity which must be greater than zero.
    pub fn new(config: ObjectiveConfig, capacity: usize) -> Self {
        assert!(capacity > 0, "archive capacity must be greater than zero");
        Self { config, capacity, individuals: Vec::new() }
    }

    /// Creates a new empty archive without capacity limit.
    pub fn unbounded(config: ObjectiveConfig) -> Self {
        Self::new(config, usize::MAX)
    }

    /// Merges candidates into the archive and returns true if archive content has changed.
    /// Candidates without objective values are ignored.
    pub fn update(&mut self, candidates: Vec<Individual>) -> bool {
        let candidates =
            candidates.into_iter().filter(|candidate| !candidate.objectives().is_empty()).collect::<Vec<_>>();

        if candidates.is_empty() {
            return false;
        }

        let insertion_set = self.get_insertion_set(candidates.as_slice());

        // first pass: decide what to remove and what to insert without touching the archive
        let mut removed = vec![false; self.individuals.len()];
        let mut accepted: Vec<usize> = Vec::with_capacity(insertion_set.len());

        'candidates: for candidate_idx in insertion_set {
            let candidate = candidates[candidate_idx].objectives();

            for (member_idx, member) in self.individuals.iter().enumerate() {
                if removed[member_idx] {
                    continue;
                }

                let member = member.objectives();
                if self.config.dominates(candidate, member) {
                    removed[member_idx] = true;
                } else if self.config.dominates(member, candidate) || self.config.is_equal(member, candidate) {
                    continue 'candidates;
                }
            }

            let is_rejected = accepted.iter().map(|&idx| candidates[idx].objectives()).any(|other| {
                self.config.dominates(other, candidate) || self.config.is_equal(other, candidate)
            });

            if !is_rejected {
                accepted.retain(|&idx| !self.config.dominates(candidate, candidates[idx].objectives()));
                accepted.push(candidate_idx);
            }
        }

        // second pass: apply removals and insertions
        let mut changed = removed.iter().any(|&is_removed| is_removed) || !accepted.is_empty();

        if changed {
            let mut is_accepted = vec![false; candidates.len()];
            accepted.iter().for_each(|&idx| is_accepted[idx] = true);

            let kept = std::mem::take(&mut self.individuals)
                .into_iter()
                .zip(removed)
                .filter(|(_, is_removed)| !is_removed)
                .map(|(individual, _)| individual);

            let inserted = candidates
                .into_iter()
                .zip(is_accepted)
                .filter(|(_, is_accepted)| *is_accepted)
                .map(|(candidate, _)| candidate);

            self.individuals = kept.chain(inserted).collect();
        }

        changed |= self.apply_capacity();

        changed
    }

    /// Returns archive members.
    pub fn individuals(&self) -> &[Individual] {
        self.individuals.as_slice()
    }

    /// Returns objective vectors of archive members.
    pub fn objectives(&self) -> Vec<Point> {
        self.individuals.iter().map(|individual| individual.objectives().to_vec()).collect()
    }

    /// Returns amount of archive members.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Returns archive capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if archive has no members.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Returns objective config used by archive.
    pub fn config(&self) -> &ObjectiveConfig {
        &self.config
    }

    /// Captures an immutable copy of archive objective vectors.
    pub fn snapshot(&self, iteration: usize, elapsed: Float) -> Snapshot {
        Snapshot::new(iteration, elapsed, self.objectives())
    }

    /// Consumes the archive and returns its members.
    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    fn get_insertion_set(&self, candidates: &[Individual]) -> Vec<usize> {
        non_dominated_sort(candidates, |a, b| self.config.dominance_order(a.objectives(), b.objectives()))
            .indices()
            .to_vec()
    }

    /// Truncates the archive to its capacity keeping the least crowded members.
    fn apply_capacity(&mut self) -> bool {
        if self.individuals.len() <= self.capacity {
            return false;
        }

        let objectives = self.individuals.iter().map(|individual| individual.objectives()).collect::<Vec<_>>();
        let distances = assign_crowding_distance(objectives.as_slice());

        let mut ranked = std::mem::take(&mut self.individuals).into_iter().zip(distances).collect::<Vec<_>>();
        ranked.sort_by(|(_, a), (_, b)| compare_floats(*b, *a));
        ranked.truncate(self.capacity);

        self.individuals = ranked.into_iter().map(|(individual, _)| individual).collect();

        true
    }
}
