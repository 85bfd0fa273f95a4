// Shared test helpers
#![allow(dead_code)]

use probe_status::models::*;

pub fn server(name: &str) -> ServerConfig {
    ServerConfig {
        name: name.into(),
        base_url: format!("http://{name}:5551"),
        description: None,
        extra: Default::default(),
    }
}

pub fn sub_test(name: &str, outcome: TestOutcome) -> SubTestRecord {
    SubTestRecord::new(outcome)
        .with("message", name)
        .with("url", format!("/api/v1/{name}"))
        .with("elapsedMs", 12)
}

pub fn passed(name: &str) -> SubTestRecord {
    sub_test(name, TestOutcome::Passed)
}

pub fn failed(name: &str) -> SubTestRecord {
    sub_test(name, TestOutcome::Failed)
}

/// Run with counts and success derived from the sub-tests.
pub fn run(tests: Vec<SubTestRecord>) -> RunResult {
    RunResult::from_tests("probe run finished", tests)
}

pub fn names(records: &[SubTestRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| {
            r.details
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}
