use super::*;

fn get_distances(points: &[&[f64]]) -> Vec<f64> {
    assign_crowding_distance(points)
}

#[test]
fn can_assign_infinite_distance_to_boundaries() {
    let distances = get_distances(&[&[0., 1.], &[0.5, 0.5], &[1., 0.]]);

    assert_eq!(distances[0], f64::INFINITY);
    assert_eq!(distances[2], f64::INFINITY);
    assert_approx_eq!(distances[1], 1.);
}

#[test]
fn can_normalize_neighbor_gaps() {
    let distances = get_distances(&[&[0., 1.], &[0.2, 0.8], &[0.5, 0.5], &[1., 0.]]);

    assert_eq!(distances[0], f64::INFINITY);
    assert_approx_eq!(distances[1], 0.5);
    assert_approx_eq!(distances[2], 0.8);
    assert_eq!(distances[3], f64::INFINITY);
}

#[test]
fn can_handle_degenerate_inputs() {
    assert!(get_distances(&[]).is_empty());
    assert_eq!(get_distances(&[&[1., 1.]]), vec![f64::INFINITY]);
    assert_eq!(get_distances(&[&[1., 1.], &[1., 1.]]), vec![f64::INFINITY, f64::INFINITY]);
}
