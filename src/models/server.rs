// Monitored server identity and its latest stored snapshot

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{RunResult, SubTestRecord};

/// Static description of a monitored server. `name` is the store key.
/// Descriptive fields beyond the known ones (region, network, ...) are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Empty when absent; config validation and the recorder reject an empty name.
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "base_url")]
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServerConfig {
    /// Config carrying only an identity (ingest for a server missing from config).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: String::new(),
            description: None,
            extra: Map::new(),
        }
    }
}

/// Server config merged with its most recent run. `results` is `None` until the first run is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSnapshot {
    #[serde(flatten)]
    pub server: ServerConfig,
    /// Serialized as `null` until the first run is recorded.
    pub results: Option<RunResult>,
    /// Code derived from the recorded run (200 passing, 409 failing).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_code: Option<u16>,
}

impl ServerSnapshot {
    pub fn empty(server: ServerConfig) -> Self {
        Self {
            server,
            results: None,
            http_code: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.server.name
    }

    pub fn is_recorded(&self) -> bool {
        self.results.is_some()
    }

    /// Sub-test records of the latest run, or an empty slice before any run.
    pub fn test_results(&self) -> &[SubTestRecord] {
        self.results
            .as_ref()
            .map(|r| r.test_results.as_slice())
            .unwrap_or_default()
    }
}
