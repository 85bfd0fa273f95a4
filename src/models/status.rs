// Result categories and status payloads handed to the HTTP layer

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{RunResult, ServerConfig, ServerSnapshot, TestOutcome};

/// Which sub-test records a status query wants to see.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultCategory {
    All,
    Passed,
    #[default]
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid result category {0:?}, expected one of: all, passed, failed")]
pub struct InvalidCategory(pub String);

impl ResultCategory {
    /// Lenient parse for query strings: missing or unrecognized values mean `Failed`.
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    /// The outcome this category selects, `None` for `All`.
    pub fn outcome(self) -> Option<TestOutcome> {
        match self {
            Self::All => None,
            Self::Passed => Some(TestOutcome::Passed),
            Self::Failed => Some(TestOutcome::Failed),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Passed => "passed",
            Self::Failed => "failed",
        }
    }
}

impl FromStr for ResultCategory {
    type Err = InvalidCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "passed" => Ok(Self::Passed),
            "failed" => Ok(Self::Failed),
            other => Err(InvalidCategory(other.to_string())),
        }
    }
}

impl fmt::Display for ResultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of every server plus one overall code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetStatus {
    pub results: Vec<ServerSnapshot>,
    pub http_code: u16,
}

/// Status of one server. `server` is absent on the synthetic not-found payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    #[serde(flatten)]
    pub server: Option<ServerConfig>,
    pub results: RunResult,
    pub http_code: u16,
}
