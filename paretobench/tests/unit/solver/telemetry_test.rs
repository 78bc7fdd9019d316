use super::*;
use crate::helpers::solver::create_collecting_logger;

#[test]
fn can_log_generation_progress_periodically() {
    let (logger, messages) = create_collecting_logger();
    let telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger, log_every: 2 });

    (1..=5).for_each(|generation| telemetry.on_generation(generation, generation as f64 / 10., 10, 1));

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].ends_with("generation 2 (20%): archive size 10, snapshots 1"));
    assert!(messages[1].ends_with("generation 4 (40%): archive size 10, snapshots 1"));
}

#[test]
fn can_log_snapshot() {
    let (logger, messages) = create_collecting_logger();
    let telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger, log_every: 0 });

    telemetry.on_generation(10, 1., 10, 1);
    telemetry.on_snapshot(&Snapshot::new(3, 0.5, vec![vec![0., 1.], vec![1., 0.]]));

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].ends_with("captured snapshot at generation 3, elapsed 0.500s, front size 2"));
}

#[test]
fn can_skip_logging_without_logger() {
    let telemetry = Telemetry::new(TelemetryMode::None);

    telemetry.on_generation(1, 0.5, 1, 1);
    telemetry.log("message");
}
