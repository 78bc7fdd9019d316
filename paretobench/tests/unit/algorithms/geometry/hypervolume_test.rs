use super::*;
use crate::helpers::models::create_front;

fn compute(front: Vec<Vec<f64>>, reference_point: &[f64]) -> f64 {
    DefaultHypervolume.compute(front.as_slice(), reference_point)
}

parameterized_test! {can_compute_two_dimensional_hypervolume, (front, reference_point, expected), {
    assert_approx_eq!(compute(front, reference_point), expected);
}}

can_compute_two_dimensional_hypervolume! {
    case_01_staircase: (vec![vec![1., 3.], vec![2., 2.], vec![3., 1.]], &[4., 4.], 6.),
    case_02_single_point: (vec![vec![1., 1.]], &[3., 3.], 4.),
    case_03_unordered: (vec![vec![3., 1.], vec![1., 3.], vec![2., 2.]], &[4., 4.], 6.),
    case_04_with_dominated: (vec![vec![1., 3.], vec![2., 2.], vec![3., 1.], vec![3., 3.]], &[4., 4.], 6.),
    case_05_duplicates: (vec![vec![2., 2.], vec![2., 2.]], &[4., 4.], 4.),
    case_06_point_at_reference: (vec![vec![5., 5.]], &[5., 5.], 0.),
    case_07_point_on_boundary: (vec![vec![0., 1.], vec![1., 0.]], &[1., 1.], 0.),
    case_08_empty: (vec![], &[1., 1.], 0.),
}

parameterized_test! {can_compute_many_dimensional_hypervolume, (front, reference_point, expected), {
    assert_approx_eq!(compute(front, reference_point), expected);
}}

can_compute_many_dimensional_hypervolume! {
    case_01_single_point: (vec![vec![1., 1., 1.]], &[2., 3., 4.], 6.),
    case_02_two_boxes: (vec![vec![0., 1., 1.], vec![1., 0., 1.]], &[2., 2., 2.], 3.),
    case_03_nested: (vec![vec![1., 1., 1.], vec![0.5, 0.5, 0.5]], &[2., 2., 2.], 3.375),
    case_04_three_points: (vec![vec![0., 0., 1.], vec![0., 1., 0.], vec![1., 0., 0.]], &[2., 2., 2.], 7.),
    case_05_one_dimension: (vec![vec![3.], vec![1.]], &[4.], 3.),
}

#[test]
fn can_compute_same_volume_in_both_routines() {
    let front = create_front(&[&[0.1, 0.9], &[0.3, 0.5], &[0.6, 0.4], &[0.9, 0.05]]);
    let reference_point = [1.1, 1.1];

    let sweep = DefaultHypervolume.compute(front.as_slice(), &reference_point);
    let points = front.iter().map(|point| point.as_slice()).collect::<Vec<_>>();
    let slicing = get_hypervolume_slicing(points.as_slice(), &reference_point);

    let lifted = front.iter().map(|point| vec![point[0], point[1], 0.]).collect::<Vec<_>>();
    let lifted = DefaultHypervolume.compute(lifted.as_slice(), &[1.1, 1.1, 1.]);

    assert_approx_eq!(sweep, slicing);
    assert_approx_eq!(sweep, lifted);
}
