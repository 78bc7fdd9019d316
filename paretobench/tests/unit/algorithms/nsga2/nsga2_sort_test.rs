use super::*;
use crate::helpers::models::create_min_config;

fn create_three_fronts() -> Vec<Vec<f64>> {
    vec![
        vec![0., 3.],
        vec![1., 2.],
        vec![2., 1.],
        vec![1., 4.],
        vec![2., 3.],
        vec![3., 2.],
        vec![2., 5.],
        vec![3., 4.],
        vec![4., 3.],
    ]
}

#[test]
fn can_select_whole_fronts_first() {
    let points = create_three_fronts();

    let mut selected = select_and_rank(&points, 6, &create_min_config());
    selected.sort();

    assert_eq!(selected, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn can_prefer_less_crowded_points_from_last_front() {
    let points = create_three_fronts();

    let selected = select_and_rank(&points, 5, &create_min_config());

    assert_eq!(&selected[..3], &[0, 1, 2]);
    let mut rest = selected[3..].to_vec();
    rest.sort();
    assert_eq!(rest, vec![3, 5]);
}

#[test]
fn can_select_no_more_than_available() {
    let points = create_three_fronts();

    let selected = select_and_rank(&points, 100, &create_min_config());

    assert_eq!(selected.len(), points.len());
}
