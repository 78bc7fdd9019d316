#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/crowding_distance_test.rs"]
mod crowding_distance_test;

use crate::utils::{Float, compare_floats};

/// Assigns a crowding distance to each objective vector in `points`: for each objective, points are
/// sorted and every point gets the gap between its immediate neighbors normalized by the objective
/// spread. The extremes of every objective receive infinite distance.
///
/// Returned distances are in the same order as `points`.
pub fn assign_crowding_distance<P: AsRef<[Float]>>(points: &[P]) -> Vec<Float> {
    let mut distances = vec![0.; points.len()];

    let Some(objective_count) = points.first().map(|point| point.as_ref().len()) else {
        return distances;
    };

    let mut order: Vec<usize> = (0..points.len()).collect();

    (0..objective_count).for_each(|objective_idx| {
        let value = |idx: usize| points[idx].as_ref()[objective_idx];

        // first, sort according to objective
        order.sort_by(|&a, &b| compare_floats(value(a), value(b)));

        // assign infinite crowding distance to the extremes
        let (first, last) = (order[0], order[order.len() - 1]);
        distances[first] = Float::INFINITY;
        distances[last] = Float::INFINITY;

        // the distance between the "best" and "worst" point according to the objective
        let spread = (value(last) - value(first)).abs();
        debug_assert!(spread >= 0.);

        if spread > 0. {
            let norm = 1. / (spread * (objective_count as Float));

            for i in 1..order.len().saturating_sub(1) {
                let distance = (value(order[i + 1]) - value(order[i - 1])).abs();
                distances[order[i]] += distance * norm;
            }
        }
    });

    distances
}
