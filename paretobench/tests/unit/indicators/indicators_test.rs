use super::*;
use crate::helpers::models::*;

fn create_engine() -> IndicatorEngine {
    IndicatorEngine::new(create_min_config())
}

fn create_run(front: &[&[f64]], snapshots: Vec<Snapshot>) -> RunFronts {
    RunFronts { front: create_front(front), snapshots, populations: vec![] }
}

parameterized_test! {can_score_front_equal_to_reference, (kind, expected), {
    let reference_front = create_front(&[&[0., 1.], &[1., 0.]]);
    let runs = vec![create_run(&[&[0., 1.], &[1., 0.]], vec![])];

    let scores = create_engine().evaluate(kind, &reference_front, &runs).unwrap();

    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].value, expected);
}}

can_score_front_equal_to_reference! {
    case_01_hypervolume: (IndicatorKind::HypervolumeRatio, 1.),
    case_02_igd_plus: (IndicatorKind::ModifiedIgdPlus, 0.),
    case_03_normalized_igd_plus: (IndicatorKind::NormalizedIgdPlus, 0.),
    case_04_epsilon: (IndicatorKind::MultiplicativeEpsilon, 1.),
}

#[test]
fn can_score_snapshots_in_order() {
    let reference_front = create_front(&[&[0., 1.], &[0.5, 0.5], &[1., 0.]]);
    let snapshots = vec![
        Snapshot::new(0, 0.1, create_front(&[&[1., 1.]])),
        Snapshot::new(5, 0.7, create_front(&[&[0.5, 0.5]])),
        Snapshot::new(9, 1.2, create_front(&[&[0., 1.], &[0.5, 0.5], &[1., 0.]])),
    ];
    let runs = vec![create_run(&[&[0., 1.], &[0.5, 0.5], &[1., 0.]], snapshots)];

    let scores = create_engine().evaluate(IndicatorKind::ModifiedIgdPlus, &reference_front, &runs).unwrap();

    let snapshots = &scores[0].snapshots;
    assert_eq!(snapshots.iter().map(|score| (score.iteration, score.elapsed)).collect::<Vec<_>>(), vec![
        (0, 0.1),
        (5, 0.7),
        (9, 1.2)
    ]);
    assert_approx_eq!(snapshots[0].value, (1. + 0.25 + 0.25 + 1.) / 3.);
    assert_approx_eq!(snapshots[1].value, (0.25 + 0. + 0.25) / 3.);
    assert_eq!(snapshots[2].value, 0.);
}

#[test]
fn can_share_reference_point_across_runs_and_snapshots() {
    let reference_front = create_front(&[&[0., 1.], &[1., 0.]]);
    let snapshots = vec![Snapshot::new(0, 0., create_front(&[&[2., 2.]]))];
    let runs = vec![create_run(&[&[0., 1.], &[1., 0.]], snapshots), create_run(&[&[1., 1.]], vec![])];

    let scores = create_engine().evaluate(IndicatorKind::HypervolumeRatio, &reference_front, &runs).unwrap();

    // reference point is (2, 2): reference volume is 2 + 1 = 3
    assert_approx_eq!(scores[0].value, 1.);
    assert_eq!(scores[0].snapshots[0].value, 0.);
    assert_approx_eq!(scores[1].value, 1. / 3.);
}

#[test]
fn can_widen_reference_point_with_populations() {
    let reference_front = create_front(&[&[0., 1.], &[1., 0.]]);
    let populations = vec![Snapshot::new(0, 0., create_front(&[&[3., 2.], &[0.5, 0.5]]))];
    let runs = vec![
        RunFronts { front: create_front(&[&[0., 1.], &[1., 0.]]), snapshots: vec![], populations },
        create_run(&[&[1., 1.]], vec![]),
    ];

    let scores = create_engine().evaluate(IndicatorKind::HypervolumeRatio, &reference_front, &runs).unwrap();

    // reference point is (3, 2): reference volume is 3 + 4 - 2 = 5
    assert_approx_eq!(scores[0].value, 1.);
    assert!(scores[0].snapshots.is_empty());
    assert_approx_eq!(scores[1].value, 2. / 5.);
}

#[test]
fn can_reject_population_with_wrong_dimension() {
    let reference_front = create_front(&[&[0., 1.], &[1., 0.]]);
    let populations = vec![Snapshot::new(0, 0., create_front(&[&[3., 2., 1.]]))];
    let runs = vec![RunFronts { front: create_front(&[&[0., 1.]]), snapshots: vec![], populations }];

    let result = create_engine().evaluate(IndicatorKind::HypervolumeRatio, &reference_front, &runs);

    assert!(result.unwrap_err().to_string().contains("expected 2 objectives, got 3"));
}

#[test]
fn can_normalize_igd_plus_by_max_value() {
    let reference_front = create_front(&[&[0., 0.]]);
    let snapshots = vec![Snapshot::new(0, 0., create_front(&[&[2., 0.]]))];
    let runs = vec![create_run(&[&[1., 0.]], snapshots), create_run(&[&[0., 0.5]], vec![])];

    let raw = create_engine().evaluate(IndicatorKind::ModifiedIgdPlus, &reference_front, &runs).unwrap();
    let normalized = create_engine().evaluate(IndicatorKind::NormalizedIgdPlus, &reference_front, &runs).unwrap();

    assert_eq!(raw[0].value, 1.);
    assert_eq!(raw[0].snapshots[0].value, 4.);
    assert_eq!(raw[1].value, 0.25);
    assert_eq!(normalized[0].value, 0.25);
    assert_eq!(normalized[0].snapshots[0].value, 1.);
    assert_eq!(normalized[1].value, 0.0625);
}

#[test]
fn can_score_empty_front_with_hypervolume() {
    let reference_front = create_front(&[&[0., 1.], &[1., 0.], &[2., 2.]]);
    let runs = vec![create_run(&[], vec![])];

    let scores = create_engine().evaluate(IndicatorKind::HypervolumeRatio, &reference_front, &runs).unwrap();

    assert_eq!(scores[0].value, 0.);
}

parameterized_test! {can_reject_empty_fronts, kind, {
    let reference_front = create_front(&[&[0., 1.], &[1., 0.]]);
    let empty_front = vec![create_run(&[], vec![])];
    let empty_snapshot = vec![create_run(&[&[0., 1.]], vec![Snapshot::new(3, 0., vec![])])];

    let engine = create_engine();

    assert!(engine.evaluate(kind, &reference_front, &empty_front).unwrap_err().to_string().contains("front is empty"));
    assert!(engine.evaluate(kind, &reference_front, &empty_snapshot).unwrap_err().to_string().contains("iteration 3"));
}}

can_reject_empty_fronts! {
    case_01_igd_plus: IndicatorKind::ModifiedIgdPlus,
    case_02_normalized_igd_plus: IndicatorKind::NormalizedIgdPlus,
    case_03_epsilon: IndicatorKind::MultiplicativeEpsilon,
}

#[test]
#[should_panic(expected = "epsilon is out of range: 2")]
fn can_assert_epsilon_range() {
    let reference_front = create_front(&[&[0., 1.], &[1., 0.]]);
    let runs = vec![create_run(&[&[0.5, 0.5]], vec![])];

    let _ = create_engine().evaluate(IndicatorKind::MultiplicativeEpsilon, &reference_front, &runs);
}

#[test]
fn can_reject_invalid_reference_front_and_dimensions() {
    let engine = create_engine();
    let runs = vec![create_run(&[&[0., 1.]], vec![])];

    assert!(engine.evaluate(IndicatorKind::HypervolumeRatio, &[], &runs).is_err());

    let reference_front = create_front(&[&[0., 1., 2.]]);
    let result = engine.evaluate(IndicatorKind::HypervolumeRatio, &reference_front, &runs);
    assert!(result.unwrap_err().to_string().contains("expected 2 objectives"));
}

#[test]
fn can_parse_indicator_kind() {
    for kind in ["hypervolume", "igd-plus", "normalized-igd-plus", "epsilon"] {
        assert_eq!(kind.parse::<IndicatorKind>().unwrap().to_string(), kind);
    }

    assert!("unknown".parse::<IndicatorKind>().is_err());
}
