//! This module contains a reference front builder: the best known approximation of a true Pareto
//! front obtained by merging fronts of many runs.

#[cfg(test)]
#[path = "../tests/unit/reference/reference_test.rs"]
mod reference_test;

use crate::archive::Archive;
use crate::models::{Individual, ObjectiveConfig, Point};
use crate::utils::compare_floats;
use std::cmp::Ordering;

/// Merges all given fronts (final and snapshot ones) into a single non-dominated front using an
/// unbounded archive. The result is sorted by objectives to keep output stable.
pub fn build_reference_front<'a, I>(config: &ObjectiveConfig, fronts: I) -> Vec<Point>
where
    I: IntoIterator<Item = &'a [Point]>,
{
    let mut archive = Archive::unbounded(config.clone());

    fronts.into_iter().for_each(|front| {
        archive.update(front.iter().map(|point| Individual::from_objectives(point.clone())).collect());
    });

    let mut front = archive.objectives();
    front.sort_by(|a, b| {
        a.iter().zip(b.iter()).map(|(a, b)| compare_floats(*a, *b)).find(|ordering| ordering.is_ne()).unwrap_or(Ordering::Equal)
    });

    front
}
