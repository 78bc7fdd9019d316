use super::*;
use crate::helpers::models::*;

#[test]
fn can_merge_fronts_of_many_runs() {
    let config = create_min_config();
    let first = create_front(&[&[0., 1.], &[0.6, 0.6], &[1., 0.]]);
    let second = create_front(&[&[0.5, 0.5], &[0.9, 0.05]]);
    let snapshot = create_front(&[&[0.2, 0.9], &[2., 2.]]);

    let reference_front = build_reference_front(&config, [first.as_slice(), second.as_slice(), snapshot.as_slice()]);

    assert_eq!(reference_front, create_front(&[&[0., 1.], &[0.2, 0.9], &[0.5, 0.5], &[0.9, 0.05], &[1., 0.]]));
}

#[test]
fn can_merge_duplicates_once() {
    let config = create_min_config();
    let front = create_front(&[&[0., 1.], &[1., 0.]]);

    let reference_front = build_reference_front(&config, [front.as_slice(), front.as_slice()]);

    assert_eq!(reference_front, front);
}

#[test]
fn can_build_empty_front_from_no_input() {
    let reference_front = build_reference_front(&create_min_config(), std::iter::empty());

    assert!(reference_front.is_empty());
}
