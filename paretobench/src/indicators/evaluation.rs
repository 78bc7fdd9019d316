#[cfg(test)]
#[path = "../../tests/unit/indicators/evaluation_test.rs"]
mod evaluation_test;

use crate::algorithms::geometry::HypervolumeCalculator;
use crate::models::{ObjectiveConfig, Point, Sense};
use crate::utils::{Float, compare_floats};

/// Returns a reference point for hypervolume computation: the componentwise worst value seen
/// across all given fronts. Returns `None` if there are no points at all.
pub fn get_reference_point<'a, I>(config: &ObjectiveConfig, fronts: I) -> Option<Point>
where
    I: IntoIterator<Item = &'a [Point]>,
{
    let worst = fronts.into_iter().flat_map(|front| front.iter()).map(|point| config.orient(point)).reduce(
        |mut worst, point| {
            worst.iter_mut().zip(point.iter()).for_each(|(worst, &value)| *worst = worst.max(value));
            worst
        },
    )?;

    Some(config.orient(worst.as_slice()))
}

/// Returns hypervolume of the front bounded by the reference point, both given in objective space.
pub fn get_hypervolume(
    calculator: &dyn HypervolumeCalculator,
    config: &ObjectiveConfig,
    front: &[Point],
    reference_point: &[Float],
) -> Float {
    let front = front.iter().map(|point| config.orient(point)).collect::<Vec<_>>();
    let reference_point = config.orient(reference_point);

    calculator.compute(front.as_slice(), reference_point.as_slice())
}

/// Returns ratio between hypervolume of the front and hypervolume of the reference front.
/// Both volumes use the same reference point.
pub fn hypervolume_ratio(
    calculator: &dyn HypervolumeCalculator,
    config: &ObjectiveConfig,
    front: &[Point],
    reference_front: &[Point],
    reference_point: &[Float],
) -> Float {
    let hypervolume = get_hypervolume(calculator, config, front, reference_point);
    let reference_hypervolume = get_hypervolume(calculator, config, reference_front, reference_point);

    get_hypervolume_ratio(hypervolume, reference_hypervolume)
}

/// Returns ratio of two hypervolumes asserting that it is within [0, 1]. When both volumes are
/// zero (e.g. all points lie on the reference point boundary), fronts are indistinguishable and
/// the ratio is one.
pub(crate) fn get_hypervolume_ratio(hypervolume: Float, reference_hypervolume: Float) -> Float {
    assert!(hypervolume >= 0., "hypervolume is negative: {hypervolume}");
    assert!(
        hypervolume <= reference_hypervolume,
        "hypervolume {hypervolume} exceeds reference hypervolume {reference_hypervolume}"
    );

    if reference_hypervolume == 0. {
        return 1.;
    }

    let ratio = hypervolume / reference_hypervolume;
    assert!((0. ..=1.).contains(&ratio), "hypervolume ratio is out of range: {ratio}");

    ratio
}

/// Returns modified inverted generational distance (IGD+): a mean over reference points of the
/// smallest squared "worse than reference" distance to the front. Distances are not square-rooted.
pub fn modified_igd_plus(config: &ObjectiveConfig, reference_front: &[Point], front: &[Point]) -> Float {
    assert!(!front.is_empty(), "cannot compute IGD+ for empty front");
    assert!(!reference_front.is_empty(), "cannot compute IGD+ for empty reference front");

    let total = reference_front
        .iter()
        .map(|reference| {
            front
                .iter()
                .map(|point| get_modified_distance(config, reference, point))
                .min_by(|&a, &b| compare_floats(a, b))
                .unwrap_or_default()
        })
        .sum::<Float>();

    let igd_plus = total / reference_front.len() as Float;
    assert!(igd_plus >= 0., "IGD+ is negative: {igd_plus}");

    igd_plus
}

/// Returns multiplicative epsilon indicator: a maximum over front points of the minimum over
/// reference points of the largest per objective ratio. Undefined ratios (zero by zero) are ignored.
pub fn multiplicative_epsilon(config: &ObjectiveConfig, reference_front: &[Point], front: &[Point]) -> Float {
    assert!(!front.is_empty(), "cannot compute epsilon for empty front");
    assert!(!reference_front.is_empty(), "cannot compute epsilon for empty reference front");

    let epsilon = front
        .iter()
        .map(|point| {
            reference_front
                .iter()
                .map(|reference| get_max_ratio(config, reference, point))
                .fold(Float::INFINITY, Float::min)
        })
        .fold(0., Float::max);

    assert!(epsilon >= 0., "epsilon is negative: {epsilon}");

    epsilon
}

fn get_modified_distance(config: &ObjectiveConfig, reference: &[Float], point: &[Float]) -> Float {
    config
        .senses()
        .iter()
        .zip(reference.iter().zip(point.iter()))
        .map(|(sense, (&reference, &value))| {
            let delta = match sense {
                Sense::Minimize => (value - reference).max(0.),
                Sense::Maximize => (reference - value).max(0.),
            };

            delta * delta
        })
        .sum()
}

fn get_max_ratio(config: &ObjectiveConfig, reference: &[Float], point: &[Float]) -> Float {
    config.senses().iter().zip(reference.iter().zip(point.iter())).fold(0., |max_ratio, (sense, (&reference, &value))| {
        let ratio = match sense {
            Sense::Minimize => reference / value,
            Sense::Maximize => value / reference,
        };

        // NOTE NaN ratio is skipped here
        if ratio > max_ratio { ratio } else { max_ratio }
    })
}
