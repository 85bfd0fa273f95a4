// Category filter over a snapshot's sub-test records.
// Counts, success flag and message are left as recorded (they describe the unfiltered run).

use crate::models::{ResultCategory, ServerSnapshot};

/// Returns `snapshot` with its sub-test records narrowed to `category`.
/// `All` is the identity; otherwise order is kept and non-matching records are dropped.
pub fn filter_test_details(snapshot: &ServerSnapshot, category: ResultCategory) -> ServerSnapshot {
    let mut filtered = snapshot.clone();
    if let (Some(outcome), Some(results)) = (category.outcome(), filtered.results.as_mut()) {
        results.test_results.retain(|t| t.is(outcome));
    }
    filtered
}
