//! Integration tests for the tracker.

use numtracker::{OperationKind, Tracker, TrackerConfig, ViewMode};
use tempfile::TempDir;

fn test_tracker(dir: &TempDir) -> Tracker {
    Tracker::open(TrackerConfig {
        path: dir.path().join("tracker"),
    })
    .unwrap()
}

// --- Realistic Workflow Tests ---

#[test]
fn test_calculator_session() {
    let dir = TempDir::new().unwrap();
    let mut tracker = test_tracker(&dir);

    // Start at 0, apply Add(5)
    let record = tracker.request_operation(OperationKind::Add, "5").unwrap();
    assert_eq!(tracker.current(), 5.0);
    assert_eq!(record.result, 5.0);
    assert_eq!(tracker.log().len(), 1);

    // Apply Multiply(3)
    tracker
        .request_operation(OperationKind::Multiply, "3")
        .unwrap();
    assert_eq!(tracker.current(), 15.0);
    assert_eq!(tracker.log().len(), 2);

    let newest = tracker.log().most_recent().unwrap();
    assert_eq!(newest.kind, OperationKind::Multiply);
    assert_eq!(newest.operand, 3.0);
    assert_eq!(newest.result, 15.0);

    // Divide(0) is rejected with no state change
    let rejected = tracker.request_operation(OperationKind::Divide, "0");
    assert!(rejected.is_err());
    assert_eq!(tracker.current(), 15.0);
    assert_eq!(tracker.log().len(), 2);

    // ClearAll resets everything
    tracker.clear_all();
    assert_eq!(tracker.current(), 0.0);
    assert!(tracker.log().is_empty());
}

#[test]
fn test_newest_record_matches_accumulator() {
    let dir = TempDir::new().unwrap();
    let mut tracker = test_tracker(&dir);

    for (kind, input) in [
        (OperationKind::Add, "10"),
        (OperationKind::Subtract, "4"),
        (OperationKind::Multiply, "2.5"),
        (OperationKind::Divide, "3"),
    ] {
        let before = tracker.log().len();
        tracker.request_operation(kind, input).unwrap();

        assert_eq!(tracker.log().len(), before + 1);
        assert_eq!(
            tracker.log().most_recent().unwrap().result,
            tracker.current()
        );
    }

    assert_eq!(tracker.current(), 5.0);
}

#[test]
fn test_log_chains_through_results() {
    let dir = TempDir::new().unwrap();
    let mut tracker = test_tracker(&dir);

    tracker.request_operation(OperationKind::Add, "8").unwrap();
    tracker
        .request_operation(OperationKind::Subtract, "3")
        .unwrap();
    tracker
        .request_operation(OperationKind::Divide, "5")
        .unwrap();

    // Chronological order is the reverse of display order: each record's
    // result is the prior record's result combined with its operand.
    let records: Vec<_> = tracker.log().iter().collect();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].result, 8.0);
    assert_eq!(records[1].result, 5.0);
    assert_eq!(records[0].result, 1.0);
}

#[test]
fn test_pending_input_cleared_on_success_only() {
    let dir = TempDir::new().unwrap();
    let mut tracker = test_tracker(&dir);

    tracker.set_input("5");
    tracker.request_operation(OperationKind::Add, "5").unwrap();
    assert_eq!(tracker.input(), "");

    tracker.set_input("oops");
    let rejected = tracker.request_operation(OperationKind::Add, "oops");
    assert!(rejected.is_err());
    assert_eq!(tracker.input(), "oops");

    tracker.clear_all();
    assert_eq!(tracker.input(), "");
}

#[test]
fn test_statistics_over_session() {
    let dir = TempDir::new().unwrap();
    let mut tracker = test_tracker(&dir);

    tracker.request_operation(OperationKind::Add, "1").unwrap();
    tracker.request_operation(OperationKind::Add, "2").unwrap();
    tracker
        .request_operation(OperationKind::Multiply, "2")
        .unwrap();
    tracker
        .request_operation(OperationKind::Divide, "3")
        .unwrap();

    let stats = tracker.stats();
    assert_eq!(stats.total_count(), 4);
    assert_eq!(stats.count_by_kind(OperationKind::Add), 2);
    assert_eq!(stats.percentage(OperationKind::Add), 50.0);
    assert_eq!(stats.percentage(OperationKind::Subtract), 0.0);
    assert_eq!(stats.most_recent().unwrap().kind, OperationKind::Divide);

    let sum: f64 = stats.distribution().iter().map(|r| r.percentage).sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn test_view_selection_is_in_memory_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tracker");

    {
        let mut tracker = Tracker::open(TrackerConfig { path: path.clone() }).unwrap();
        assert_eq!(tracker.view(), ViewMode::Calculator);
        tracker.set_view(ViewMode::Statistics);
        assert_eq!(tracker.view(), ViewMode::Statistics);
    }

    // Reopen: view resets, it is never persisted
    let tracker = Tracker::open(TrackerConfig { path }).unwrap();
    assert_eq!(tracker.view(), ViewMode::Calculator);
}
