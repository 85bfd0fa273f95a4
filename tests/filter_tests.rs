// Category filter tests

mod common;

use common::{failed, names, passed, run, server};
use probe_status::filter::filter_test_details;
use probe_status::models::{ResultCategory, ServerSnapshot};

fn recorded_snapshot() -> ServerSnapshot {
    let results = run(vec![failed("A"), passed("B"), failed("C")]);
    ServerSnapshot {
        server: server("alpha"),
        results: Some(results),
        http_code: Some(409),
    }
}

#[test]
fn test_filter_all_is_identity() {
    let snapshot = recorded_snapshot();
    assert_eq!(filter_test_details(&snapshot, ResultCategory::All), snapshot);
}

#[test]
fn test_filter_failed_keeps_order() {
    let filtered = filter_test_details(&recorded_snapshot(), ResultCategory::Failed);
    assert_eq!(names(filtered.test_results()), vec!["A", "C"]);
}

#[test]
fn test_filter_passed() {
    let filtered = filter_test_details(&recorded_snapshot(), ResultCategory::Passed);
    assert_eq!(names(filtered.test_results()), vec!["B"]);
}

#[test]
fn test_filter_is_idempotent() {
    let once = filter_test_details(&recorded_snapshot(), ResultCategory::Failed);
    let twice = filter_test_details(&once, ResultCategory::Failed);
    assert_eq!(once, twice);
}

#[test]
fn test_filter_leaves_counts_and_flags_untouched() {
    let snapshot = recorded_snapshot();
    let filtered = filter_test_details(&snapshot, ResultCategory::Passed);
    let before = snapshot.results.as_ref().unwrap();
    let after = filtered.results.as_ref().unwrap();

    assert_eq!(after.num_failed_tests, 2);
    assert_eq!(after.num_passed_tests, 1);
    assert_eq!(after.success, before.success);
    assert_eq!(after.message, before.message);
    assert_eq!(filtered.server, snapshot.server);
    assert_eq!(filtered.http_code, snapshot.http_code);
    assert_eq!(after.test_results.len(), 1);
}

#[test]
fn test_filter_does_not_touch_input() {
    let snapshot = recorded_snapshot();
    let _ = filter_test_details(&snapshot, ResultCategory::Passed);
    assert_eq!(snapshot.test_results().len(), 3);
}

#[test]
fn test_filter_empty_snapshot() {
    let snapshot = ServerSnapshot::empty(server("alpha"));
    for category in [
        ResultCategory::All,
        ResultCategory::Passed,
        ResultCategory::Failed,
    ] {
        assert_eq!(filter_test_details(&snapshot, category), snapshot);
    }
}
