// Result store tests: initialization, recording, replacement, ordering

mod common;

use common::{failed, names, passed, run, server};
use probe_status::models::RunResult;
use probe_status::store::{RecordError, ResultStore};
use std::sync::Arc;

#[tokio::test]
async fn test_initialize_seeds_empty_snapshot_per_server() {
    let store = ResultStore::new();
    assert!(store.is_empty().await);

    store.initialize(&[server("alpha"), server("beta")]).await;

    assert_eq!(store.len().await, 2);
    let alpha = store.get("alpha").await.expect("alpha seeded");
    assert_eq!(alpha.server, server("alpha"));
    assert!(!alpha.is_recorded());
    assert!(alpha.http_code.is_none());
    assert!(alpha.test_results().is_empty());
}

#[tokio::test]
async fn test_initialize_again_resets_store() {
    let store = ResultStore::with_servers(&[server("alpha")]);
    store
        .record(server("alpha"), run(vec![failed("a")]))
        .await
        .unwrap();
    store
        .record(server("gamma"), run(vec![passed("g")]))
        .await
        .unwrap();

    store.initialize(&[server("alpha"), server("beta")]).await;

    let all = store.get_all().await;
    let all_names: Vec<&str> = all.iter().map(|s| s.name()).collect();
    assert_eq!(all_names, vec!["alpha", "beta"]);
    assert!(all.iter().all(|s| !s.is_recorded()));
    assert!(store.get("gamma").await.is_none());
}

#[tokio::test]
async fn test_record_replaces_whole_snapshot() {
    let store = ResultStore::with_servers(&[server("alpha")]);
    let first = run(vec![failed("r1-a"), failed("r1-b")]);
    let second = run(vec![passed("r2-a")]);

    store.record(server("alpha"), first).await.unwrap();
    let mut updated = server("alpha");
    updated.description = Some("moved".into());
    store.record(updated.clone(), second.clone()).await.unwrap();

    let snapshot = store.get("alpha").await.unwrap();
    assert_eq!(snapshot.server, updated);
    assert_eq!(snapshot.results, Some(second));
    assert_eq!(names(snapshot.test_results()), vec!["r2-a"]);
    assert_eq!(snapshot.http_code, Some(200));
}

#[tokio::test]
async fn test_record_stamps_conflict_code_for_failed_run() {
    let store = ResultStore::with_servers(&[server("alpha")]);
    store
        .record(server("alpha"), run(vec![passed("a"), failed("b")]))
        .await
        .unwrap();
    assert_eq!(store.get("alpha").await.unwrap().http_code, Some(409));
}

#[tokio::test]
async fn test_record_without_name_is_dropped() {
    let store = ResultStore::with_servers(&[server("alpha")]);
    let before = store.get_all().await;

    let err = store
        .record(server(""), run(vec![failed("x")]))
        .await
        .unwrap_err();

    assert_eq!(err, RecordError::MissingName);
    assert_eq!(store.get_all().await, before);
    assert!(store.get("").await.is_none());
}

#[tokio::test]
async fn test_record_unconfigured_name_is_appended() {
    let store = ResultStore::with_servers(&[server("alpha"), server("beta")]);
    store
        .record(server("gamma"), run(vec![passed("g")]))
        .await
        .unwrap();
    store
        .record(server("alpha"), run(vec![passed("a")]))
        .await
        .unwrap();

    let order: Vec<String> = store
        .get_all()
        .await
        .iter()
        .map(|s| s.name().to_string())
        .collect();
    assert_eq!(order, vec!["alpha", "beta", "gamma"]);
}

#[tokio::test]
async fn test_current_test_results() {
    let store = ResultStore::with_servers(&[server("alpha"), server("beta")]);
    store
        .record(
            server("alpha"),
            run(vec![failed("a"), passed("b"), failed("c")]),
        )
        .await
        .unwrap();

    assert_eq!(
        names(&store.current_test_results("alpha").await),
        vec!["a", "b", "c"]
    );
    assert!(store.current_test_results("beta").await.is_empty());
    assert!(store.current_test_results("nope").await.is_empty());
}

#[tokio::test]
async fn test_concurrent_records_keep_one_whole_run() {
    let store = Arc::new(ResultStore::with_servers(&[server("alpha")]));
    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let tests = (0..4).map(|j| passed(&format!("run{i}-{j}"))).collect();
            store.record(server("alpha"), run(tests)).await.unwrap();
        }));
    }
    for h in handles {
        h.await.unwrap();
    }

    let snapshot = store.get("alpha").await.unwrap();
    let recorded = names(snapshot.test_results());
    assert_eq!(recorded.len(), 4);
    let prefix = recorded[0].split('-').next().unwrap().to_string();
    assert!(recorded.iter().all(|n| n.starts_with(&format!("{prefix}-"))));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_record_accepts_run_with_no_sub_tests() {
    let store = ResultStore::with_servers(&[server("alpha")]);
    let empty_run = RunResult {
        success: true,
        message: "nothing to run".into(),
        ..RunResult::default()
    };
    store.record(server("alpha"), empty_run).await.unwrap();

    let snapshot = store.get("alpha").await.unwrap();
    assert!(snapshot.is_recorded());
    assert!(snapshot.test_results().is_empty());
}
