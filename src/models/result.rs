// Probe run results as reported by the probe runners

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestOutcome {
    Passed,
    Failed,
}

/// One sub-test outcome. Only `result` is interpreted; every other field
/// (name, timing, error detail, ...) is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubTestRecord {
    pub result: TestOutcome,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl SubTestRecord {
    pub fn new(result: TestOutcome) -> Self {
        Self {
            result,
            details: Map::new(),
        }
    }

    /// Builder-style helper for attaching a descriptive field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn is(&self, outcome: TestOutcome) -> bool {
        self.result == outcome
    }
}

/// Outcome of one full probe run. `test_results` keeps report order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    pub success: bool,
    #[serde(default)]
    pub num_failed_tests: u32,
    #[serde(default)]
    pub num_passed_tests: u32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub test_results: Vec<SubTestRecord>,
}

impl RunResult {
    /// Synthetic failed payload returned when no real run can be served.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            success: false,
            num_failed_tests: 0,
            num_passed_tests: 0,
            message: message.into(),
            test_results: Vec::new(),
        }
    }

    /// Builds a run whose counts and success flag are derived from `test_results`.
    pub fn from_tests(message: impl Into<String>, test_results: Vec<SubTestRecord>) -> Self {
        let count = |outcome| {
            let n = test_results.iter().filter(|t| t.is(outcome)).count();
            u32::try_from(n).unwrap_or(u32::MAX)
        };
        let num_failed_tests = count(TestOutcome::Failed);
        let num_passed_tests = count(TestOutcome::Passed);
        Self {
            success: num_failed_tests == 0,
            num_failed_tests,
            num_passed_tests,
            message: message.into(),
            test_results,
        }
    }
}
