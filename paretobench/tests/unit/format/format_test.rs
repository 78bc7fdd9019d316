use super::*;
use crate::helpers::models::*;
use std::fs;

#[test]
fn can_write_and_read_pareto_front() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pareto.txt");
    let front = create_front(&[&[0., 1.], &[0.1, 0.9], &[1., 0.]]);

    write_front(&path, &front).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "0 1\n0.1 0.9\n1 0\n");
    assert_eq!(read_front(&path).unwrap(), front);
}

#[test]
fn can_read_front_skipping_empty_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pareto.txt");
    fs::write(&path, "0.5 0.25\n\n  1e-3   2\n").unwrap();

    let front = read_front(&path).unwrap();

    assert_eq!(front, vec![vec![0.5, 0.25], vec![0.001, 2.]]);
}

#[test]
fn can_report_parse_error_with_line_number() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pareto.txt");
    fs::write(&path, "0 1\n0.5 abc\n").unwrap();

    let err = read_front(&path).unwrap_err().to_string();

    assert!(err.contains("cannot parse value 'abc' at line 2"));
}

#[test]
fn can_report_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let err = read_front(&dir.path().join("missing.txt")).unwrap_err().to_string();

    assert!(err.starts_with("cannot open pareto front file"));
    assert!(err.contains("missing.txt"));
}

#[test]
fn can_write_and_read_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("snapshot_");
    let snapshots = vec![
        Snapshot::new(0, 0.015, create_front(&[&[1., 1.]])),
        Snapshot::new(12, 1.5, create_front(&[&[0., 1.], &[1., 0.]])),
    ];

    write_snapshots(&prefix, &snapshots).unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("snapshot_1.txt")).unwrap(), "12 1.5\n0 1\n1 0\n");
    assert_eq!(read_snapshots(&prefix).unwrap(), snapshots);
}

#[test]
fn can_read_no_snapshots_when_files_are_absent() {
    let dir = tempfile::tempdir().unwrap();

    let snapshots = read_snapshots(&dir.path().join("snapshot_")).unwrap();

    assert!(snapshots.is_empty());
}

#[test]
fn can_reject_snapshot_without_header() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("snapshot_0.txt"), "0.5 0.5 0.5\n").unwrap();

    let result = read_snapshots(&dir.path().join("snapshot_"));

    assert!(result.is_err());
}

#[test]
fn can_write_and_read_scalar() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("value.txt");

    write_scalar(&path, 0.75).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "0.75\n");
    assert_eq!(read_scalar(&path).unwrap(), 0.75);
}

#[test]
fn can_write_series_summary_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let series_path = dir.path().join("series.txt");
    let summary_path = dir.path().join("summary.txt");
    let values_path = dir.path().join("values.txt");
    let scores = vec![
        SnapshotScore { iteration: 0, elapsed: 0.5, value: 0.25 },
        SnapshotScore { iteration: 10, elapsed: 2., value: 1. },
    ];

    write_series(&series_path, &scores).unwrap();
    write_summary(&summary_path, &Summary { mean: 0.5, stdev: 0.125 }).unwrap();
    write_values(&values_path, &[0.5, 1.]).unwrap();

    assert_eq!(fs::read_to_string(&series_path).unwrap(), "0,0.5,0.25\n10,2,1\n");
    assert_eq!(fs::read_to_string(&summary_path).unwrap(), "0.5, 0.125\n");
    assert_eq!(fs::read_to_string(&values_path).unwrap(), "0.5\n1\n");
}

#[test]
fn can_write_non_dominated_counts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("non_dominated.txt");
    let counts = vec![
        NonDominatedCount { iteration: 0, elapsed: 0.001, count: 4 },
        NonDominatedCount { iteration: 7, elapsed: 1.5, count: 12 },
    ];

    write_counts(&path, &counts).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "0,0.001,4
7,1.5,12
");
}

#[test]
fn can_write_solutions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solutions.txt");

    write_solutions(&path, &create_individuals(&[&[0.1, 0.2]])).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "1 2\n");
}

#[test]
fn can_build_sequence_path() {
    let path = get_sequence_path(Path::new("out/snapshot_"), 3);

    assert_eq!(path, PathBuf::from("out/snapshot_3.txt"));
}
