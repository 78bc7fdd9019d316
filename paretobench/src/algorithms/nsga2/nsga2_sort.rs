#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/nsga2_sort_test.rs"]
mod nsga2_sort_test;

use super::*;
use crate::models::ObjectiveConfig;
use crate::utils::{Float, compare_floats};

/// Select `n` objective vectors using the approach taken by NSGA2 and returns their indices.
///
/// We first sort the points into their corresponding pareto fronts using a non-dominated sort
/// algorithm. Then, we put as many "complete" fronts into the result set, until we cannot fit in a
/// whole front anymore, without exceeding `n` points in the result set. For this last front,
/// that does not completely fit into the result set, we sort it's points according to their
/// crowding distance (higher crowding distance is "better"), and prefer those points with the
/// higher crowding distance until we have exactly `n` points in the result set.
pub fn select_and_rank<P: AsRef<[Float]>>(points: &[P], n: usize, config: &ObjectiveConfig) -> Vec<usize> {
    // cannot select more points than we actually have
    let n = points.len().min(n);

    let mut result = Vec::with_capacity(n);
    let mut missing = n;

    let mut front = non_dominated_sort(points, |a, b| config.dominance_order(a.as_ref(), b.as_ref()));

    while !front.is_empty() && missing > 0 {
        let mut indices = front.indices().to_vec();

        if indices.len() > missing {
            // the front does not fit in total: prefer the least crowded points
            let members = indices.iter().map(|&idx| points[idx].as_ref()).collect::<Vec<_>>();
            let distances = assign_crowding_distance(members.as_slice());

            let mut ranked = indices.into_iter().zip(distances).collect::<Vec<_>>();
            ranked.sort_by(|(_, a), (_, b)| compare_floats(*b, *a));

            indices = ranked.into_iter().map(|(idx, _)| idx).collect();
        }

        // take no more than `missing`
        let take = indices.len().min(missing);
        result.extend(indices.into_iter().take(take));

        missing -= take;
        front = front.next_front();
    }

    debug_assert_eq!(n, result.len());

    result
}
