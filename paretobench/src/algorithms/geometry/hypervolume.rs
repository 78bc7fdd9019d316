#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/hypervolume_test.rs"]
mod hypervolume_test;

use crate::algorithms::nsga2::non_dominated_sort;
use crate::models::Point;
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;

/// Computes a volume of objective space dominated by a front and bounded by a reference point.
/// Both front and reference point are expected in minimization space.
pub trait HypervolumeCalculator: Send + Sync {
    /// Returns hypervolume of the front. Points which do not strictly dominate the reference point
    /// contribute nothing.
    fn compute(&self, front: &[Point], reference_point: &[Float]) -> Float;
}

/// An exact hypervolume calculator: a sweep line for two objectives and hypervolume by slicing
/// objectives (HSO) for more.
#[derive(Clone, Debug, Default)]
pub struct DefaultHypervolume;

impl HypervolumeCalculator for DefaultHypervolume {
    fn compute(&self, front: &[Point], reference_point: &[Float]) -> Float {
        let points = front
            .iter()
            .filter(|point| {
                point.len() == reference_point.len()
                    && point.iter().zip(reference_point.iter()).all(|(value, bound)| value < bound)
            })
            .map(|point| point.as_slice())
            .collect::<Vec<_>>();

        if points.is_empty() {
            return 0.;
        }

        match reference_point.len() {
            1 => get_hypervolume_1d(points.as_slice(), reference_point),
            2 => get_hypervolume_2d(points, reference_point),
            _ => get_hypervolume_slicing(points.as_slice(), reference_point),
        }
    }
}

fn get_hypervolume_1d(points: &[&[Float]], reference_point: &[Float]) -> Float {
    let best = points.iter().map(|point| point[0]).fold(Float::INFINITY, Float::min);

    (reference_point[0] - best).max(0.)
}

fn get_hypervolume_2d(mut points: Vec<&[Float]>, reference_point: &[Float]) -> Float {
    points.sort_by(|a, b| compare_floats(a[0], b[0]).then_with(|| compare_floats(a[1], b[1])));

    let (volume, _) = points.iter().fold((0., reference_point[1]), |(volume, last_y), point| {
        if point[1] < last_y {
            (volume + (reference_point[0] - point[0]) * (last_y - point[1]), point[1])
        } else {
            (volume, last_y)
        }
    });

    volume
}

fn get_hypervolume_slicing(points: &[&[Float]], reference_point: &[Float]) -> Float {
    let dimension = reference_point.len();
    if dimension == 2 {
        return get_hypervolume_2d(points.to_vec(), reference_point);
    }

    let last = dimension - 1;
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| compare_floats(a[last], b[last]));

    let sub_reference = &reference_point[..last];

    (0..sorted.len()).fold(0., |volume, idx| {
        let upper = sorted.get(idx + 1).map_or(reference_point[last], |next| next[last]);
        let depth = upper - sorted[idx][last];

        if depth <= 0. {
            return volume;
        }

        // project all points below the slice and keep only non-dominated ones
        let projected = sorted[..=idx].iter().map(|point| &point[..last]).collect::<Vec<_>>();
        let slice = non_dominated_sort(projected.as_slice(), |a, b| dominance_order(a, b))
            .iter()
            .map(|(point, _)| *point)
            .collect::<Vec<_>>();

        volume + depth * get_hypervolume_slicing(slice.as_slice(), sub_reference)
    })
}

fn dominance_order(a: &[Float], b: &[Float]) -> Ordering {
    let (less, greater) = a.iter().zip(b.iter()).fold((false, false), |(less, greater), (a, b)| {
        (less || a < b, greater || a > b)
    });

    match (less, greater) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
