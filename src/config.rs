use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::models::ServerConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub http: HttpConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
    /// Monitored servers; seeds the result store at startup.
    #[serde(default)]
    pub servers: Vec<ServerConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    /// How often to log the fleet summary at INFO level.
    #[serde(default = "default_stats_log_interval_secs")]
    pub stats_log_interval_secs: u64,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            stats_log_interval_secs: default_stats_log_interval_secs(),
        }
    }
}

fn default_stats_log_interval_secs() -> u64 {
    60
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// The configured server named `name`, if any.
    pub fn server(&self, name: &str) -> Option<&ServerConfig> {
        self.servers.iter().find(|s| s.name == name)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.http.port > 0,
            "http.port must be between 1 and 65535, got {}",
            self.http.port
        );
        anyhow::ensure!(!self.http.host.is_empty(), "http.host must be non-empty");
        anyhow::ensure!(
            self.monitoring.stats_log_interval_secs > 0,
            "monitoring.stats_log_interval_secs must be > 0, got {}",
            self.monitoring.stats_log_interval_secs
        );
        anyhow::ensure!(
            !self.servers.is_empty(),
            "servers must list at least one server"
        );

        let mut seen = HashSet::with_capacity(self.servers.len());
        for (i, server) in self.servers.iter().enumerate() {
            anyhow::ensure!(
                !server.name.is_empty(),
                "servers[{}].name must be non-empty",
                i
            );
            anyhow::ensure!(
                !server.base_url.is_empty(),
                "servers[{}].base_url must be non-empty (server {})",
                i,
                server.name
            );
            anyhow::ensure!(
                seen.insert(server.name.as_str()),
                "servers[{}].name {:?} is a duplicate",
                i,
                server.name
            );
        }
        Ok(())
    }
}
