// Status aggregation: fleet-wide and per-server views with a derived status code.

use crate::filter::filter_test_details;
use crate::models::{FleetStatus, ResultCategory, RunResult, ServerSnapshot, ServerStatus};
use crate::store::ResultStore;

pub const HTTP_OK: u16 = 200;
pub const HTTP_NOT_FOUND: u16 = 404;
pub const HTTP_CONFLICT: u16 = 409;

fn is_success_code(code: u16) -> bool {
    (200..=299).contains(&code)
}

/// Filters every snapshot and derives one code: 409 if any server carries a
/// non-2xx code, otherwise 200. Servers without a code (not yet run) count as healthy.
pub fn fleet_status(snapshots: &[ServerSnapshot], category: ResultCategory) -> FleetStatus {
    let results: Vec<ServerSnapshot> = snapshots
        .iter()
        .map(|s| filter_test_details(s, category))
        .collect();
    let failing = results
        .iter()
        .filter_map(|s| s.http_code)
        .any(|code| !is_success_code(code));
    FleetStatus {
        results,
        http_code: if failing { HTTP_CONFLICT } else { HTTP_OK },
    }
}

/// Status of a single server given what the store holds for `name`.
pub fn server_status(
    name: Option<&str>,
    snapshot: Option<&ServerSnapshot>,
    category: ResultCategory,
) -> ServerStatus {
    let Some(name) = name else {
        return not_found("Name None not found".to_string());
    };
    let Some(snapshot) = snapshot.filter(|s| s.is_recorded()) else {
        return not_found(format!("Test results unavailable for server: {name}"));
    };

    let filtered = filter_test_details(snapshot, category);
    let results = filtered.results.unwrap_or_default();
    let http_code = if results.success {
        HTTP_OK
    } else {
        HTTP_CONFLICT
    };
    ServerStatus {
        server: Some(filtered.server),
        results,
        http_code,
    }
}

fn not_found(message: String) -> ServerStatus {
    ServerStatus {
        server: None,
        results: RunResult::unavailable(message),
        http_code: HTTP_NOT_FOUND,
    }
}

/// Fleet-wide status read from `store`.
pub async fn get_status(store: &ResultStore, category: ResultCategory) -> FleetStatus {
    let snapshots = store.get_all().await;
    fleet_status(&snapshots, category)
}

/// Status for one server read from `store`. `None` models a request with no name at all.
pub async fn get_status_by_name(
    store: &ResultStore,
    name: Option<&str>,
    category: ResultCategory,
) -> ServerStatus {
    let snapshot = match name {
        Some(n) => store.get(n).await,
        None => None,
    };
    server_status(name, snapshot.as_ref(), category)
}
