use super::*;
use crate::helpers::models::create_min_config;

/// Creates `n_fronts` with each having `n` points in it.
fn create_points_with_n_fronts(n: usize, n_fronts: usize) -> (Vec<Vec<f64>>, Vec<Vec<usize>>) {
    let mut points = Vec::with_capacity(n * n_fronts);
    let mut expected_fronts = Vec::with_capacity(n_fronts);

    for front in 0..n_fronts {
        let mut current_front = Vec::with_capacity(n);
        for i in 0..n {
            points.push(vec![(front + i) as f64, (front + n - i) as f64]);
            current_front.push(front * n + i);
        }
        expected_fronts.push(current_front);
    }

    (points, expected_fronts)
}

fn sort_points(points: &[Vec<f64>]) -> Front<'_, Vec<f64>> {
    let config = create_min_config();
    non_dominated_sort(points, move |a, b| config.dominance_order(a, b))
}

#[test]
fn can_sort_points_into_fronts() {
    let points = vec![vec![1., 2.], vec![1., 2.], vec![2., 1.], vec![1., 3.], vec![0., 2.]];

    let f0 = sort_points(&points);
    assert_eq!(0, f0.rank());
    assert_eq!(&[2, 4], f0.indices());

    let f1 = f0.next_front();
    assert_eq!(1, f1.rank());
    assert_eq!(&[0, 1], f1.indices());

    let f2 = f1.next_front();
    assert_eq!(2, f2.rank());
    assert_eq!(&[3], f2.indices());

    let f3 = f2.next_front();
    assert_eq!(3, f3.rank());
    assert!(f3.is_empty());
}

#[test]
fn can_iterate_over_front_elements() {
    let points = vec![vec![1., 2.], vec![0., 3.], vec![2., 2.]];

    let front = sort_points(&points);
    let elements = front.iter().map(|(point, idx)| (point.clone(), idx)).collect::<Vec<_>>();

    assert_eq!(elements, vec![(vec![1., 2.], 0), (vec![0., 3.], 1)]);
    assert_eq!(front.len(), 2);
}

parameterized_test! {can_sort_generated_fronts, (n, n_fronts), {
    can_sort_generated_fronts_impl(n, n_fronts);
}}

can_sort_generated_fronts! {
    case_01: (3, 1),
    case_02: (3, 3),
    case_03: (5, 4),
    case_04: (1, 10),
}

fn can_sort_generated_fronts_impl(n: usize, n_fronts: usize) {
    let (points, expected_fronts) = create_points_with_n_fronts(n, n_fronts);

    let mut front = sort_points(&points);
    for (expected_rank, expected_front) in expected_fronts.iter().enumerate() {
        assert_eq!(expected_rank, front.rank());

        let mut indices = front.indices().to_vec();
        indices.sort();
        assert_eq!(&indices, expected_front);

        front = front.next_front();
    }

    assert!(front.is_empty());
}

#[test]
fn can_handle_empty_input() {
    let points: Vec<Vec<f64>> = vec![];

    let front = sort_points(&points);

    assert!(front.is_empty());
    assert!(front.next_front().is_empty());
}
