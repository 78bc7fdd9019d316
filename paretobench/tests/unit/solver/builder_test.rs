use super::*;
use crate::helpers::models::create_min_config;
use crate::helpers::solver::{FixedAdapter, create_collecting_logger};

fn create_builder() -> Builder {
    Builder::default().with_config(create_min_config()).with_adapter(Box::new(FixedAdapter::new(vec![], vec![])))
}

#[test]
fn can_use_default_max_time_when_no_limit_specified() {
    let (logger, messages) = create_collecting_logger();

    let solver = create_builder().with_telemetry(TelemetryMode::OnlyLogging { logger, log_every: 1 }).build().unwrap();

    assert_eq!(solver.time_limit, Some(10.));
    assert_eq!(solver.iteration_limit, None);
    assert!(solver.quota.is_some());
    assert_eq!(messages.lock().unwrap().as_slice(), &["configured to use default max-time 10s".to_string()]);
}

#[test]
fn can_configure_limits() {
    let (logger, messages) = create_collecting_logger();

    let solver = create_builder()
        .with_max_generations(Some(100))
        .with_max_time(Some(5.))
        .with_capacity(Some(20))
        .with_max_snapshots(4)
        .with_telemetry(TelemetryMode::OnlyLogging { logger, log_every: 1 })
        .build()
        .unwrap();

    assert_eq!(solver.time_limit, Some(5.));
    assert_eq!(solver.iteration_limit, Some(100));
    assert_eq!(solver.capacity, 20);
    assert_eq!(solver.max_snapshots, 4);
    assert_eq!(
        messages.lock().unwrap().as_slice(),
        &[
            "configured to use max-generations 100".to_string(),
            "configured to use max-time 5s".to_string(),
            "configured to use archive capacity 20".to_string(),
            "configured to capture up to 4 snapshots".to_string(),
        ]
    );
}

#[test]
fn can_run_with_sub_second_time_limit() {
    let (logger, messages) = create_collecting_logger();

    let result = create_builder()
        .with_max_time(Some(0.25))
        .with_telemetry(TelemetryMode::OnlyLogging { logger, log_every: 0 })
        .build()
        .unwrap()
        .solve()
        .unwrap();

    assert_eq!(result.statistics.time_limit, Some(0.25));
    assert_eq!(result.statistics.iteration_limit, None);
    assert!(result.statistics.solving_time >= 0.25 && result.statistics.solving_time < 5.);
    assert_eq!(messages.lock().unwrap().first(), Some(&"configured to use max-time 0.25s".to_string()));
}

#[test]
fn can_use_only_generation_limit() {
    let solver = create_builder().with_max_generations(Some(3)).build().unwrap();

    assert_eq!(solver.time_limit, None);
    assert_eq!(solver.iteration_limit, Some(3));
    assert_eq!(solver.capacity, usize::MAX);
    assert!(solver.quota.is_none());
}

parameterized_test! {can_reject_invalid_configuration, (builder, expected), {
    assert_eq!(builder.build().err(), Some(GenericError::from(expected)));
}}

can_reject_invalid_configuration! {
    case_01_no_config: (Builder::default().with_adapter(Box::new(FixedAdapter::new(vec![], vec![]))),
        "objective config is not specified"),
    case_02_no_adapter: (Builder::default().with_config(create_min_config()), "optimizer adapter is not specified"),
    case_03_zero_capacity: (create_builder().with_capacity(Some(0)), "archive capacity must be greater than zero"),
}
