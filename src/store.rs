// In-memory result store: latest snapshot per server identity.
// One lock guards the whole map, so every operation is atomic and writes are last-write-wins.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use crate::models::{RunResult, ServerConfig, ServerSnapshot, SubTestRecord};

/// Why a probe run was not stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("server name must be non-empty")]
    MissingName,
}

#[derive(Default)]
struct Inner {
    /// Identities in first-seen order (initialization order, then first record).
    order: Vec<String>,
    snapshots: HashMap<String, ServerSnapshot>,
}

impl Inner {
    fn put(&mut self, snapshot: ServerSnapshot) {
        let name = snapshot.name().to_string();
        if self.snapshots.insert(name.clone(), snapshot).is_none() {
            self.order.push(name);
        }
    }
}

#[derive(Default)]
pub struct ResultStore {
    inner: RwLock<Inner>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh store seeded with one empty snapshot per server.
    pub fn with_servers(servers: &[ServerConfig]) -> Self {
        let mut inner = Inner::default();
        for server in servers {
            inner.put(ServerSnapshot::empty(server.clone()));
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Resets the store to one empty snapshot per server. Anything recorded before is dropped.
    #[instrument(skip(self, servers), fields(repo = "results", operation = "initialize", servers_count = servers.len()))]
    pub async fn initialize(&self, servers: &[ServerConfig]) {
        let mut inner = self.inner.write().await;
        *inner = Inner::default();
        for server in servers {
            inner.put(ServerSnapshot::empty(server.clone()));
        }
        debug!("result store initialized");
    }

    /// Replaces the stored snapshot for `server.name` with `server` + `result`.
    /// An empty name stores nothing and returns [`RecordError::MissingName`].
    #[instrument(skip(self, server, result), fields(repo = "results", operation = "record", server = %server.name, success = result.success))]
    pub async fn record(&self, server: ServerConfig, result: RunResult) -> Result<(), RecordError> {
        if server.name.is_empty() {
            warn!("dropping probe run without a server name");
            return Err(RecordError::MissingName);
        }
        let http_code = if result.success {
            crate::status::HTTP_OK
        } else {
            crate::status::HTTP_CONFLICT
        };
        let snapshot = ServerSnapshot {
            server,
            results: Some(result),
            http_code: Some(http_code),
        };
        self.inner.write().await.put(snapshot);
        debug!("probe run recorded");
        Ok(())
    }

    pub async fn get(&self, name: &str) -> Option<ServerSnapshot> {
        self.inner.read().await.snapshots.get(name).cloned()
    }

    /// Every snapshot, in first-seen order.
    pub async fn get_all(&self) -> Vec<ServerSnapshot> {
        let inner = self.inner.read().await;
        inner
            .order
            .iter()
            .filter_map(|name| inner.snapshots.get(name).cloned())
            .collect()
    }

    /// Sub-test records of the latest run for `name`, empty when unknown or not yet run.
    pub async fn current_test_results(&self, name: &str) -> Vec<SubTestRecord> {
        self.inner
            .read()
            .await
            .snapshots
            .get(name)
            .map(|s| s.test_results().to_vec())
            .unwrap_or_default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.snapshots.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
