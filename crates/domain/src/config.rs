use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub peers: PeersConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_toml(contents: &str) -> Result<Self, DomainError> {
        toml::from_str(contents).map_err(|e| DomainError::ConfigError(e.to_string()))
    }
}

/// Timings and sizing for refresh cycles and the client cache.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshConfig {
    /// Single wall-clock bound for one whole refresh batch, not per peer.
    #[serde(default = "default_batch_deadline_ms")]
    pub batch_deadline_ms: u64,

    /// Number of workers refreshing peers in parallel. Bounds parallelism
    /// independently of the peer count.
    #[serde(default = "default_worker_pool_size")]
    pub worker_pool_size: usize,

    /// Idle time after which a cached admin client is evicted.
    #[serde(default = "default_client_max_idle_secs")]
    pub client_max_idle_secs: u64,

    /// Period of the client cache janitor. Shorter than, and decoupled
    /// from, the refresh interval.
    #[serde(default = "default_janitor_period_secs")]
    pub janitor_period_secs: u64,

    /// Period between refresh cycles.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

impl RefreshConfig {
    pub fn batch_deadline(&self) -> Duration {
        Duration::from_millis(self.batch_deadline_ms)
    }

    pub fn client_max_idle(&self) -> Duration {
        Duration::from_secs(self.client_max_idle_secs)
    }

    pub fn janitor_period(&self) -> Duration {
        Duration::from_secs(self.janitor_period_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            batch_deadline_ms: default_batch_deadline_ms(),
            worker_pool_size: default_worker_pool_size(),
            client_max_idle_secs: default_client_max_idle_secs(),
            janitor_period_secs: default_janitor_period_secs(),
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PeersConfig {
    /// Admin addresses of known peer routers.
    #[serde(default)]
    pub admin_addresses: Vec<String>,

    /// This process's own admin endpoint. A peer whose address matches is
    /// refreshed through the in-process path instead of the RPC client.
    #[serde(default)]
    pub local_admin_address: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Command line flags that override values from the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub batch_deadline_ms: Option<u64>,
    pub worker_pool_size: Option<usize>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(deadline) = overrides.batch_deadline_ms {
            self.refresh.batch_deadline_ms = deadline;
        }
        if let Some(pool) = overrides.worker_pool_size {
            self.refresh.worker_pool_size = pool;
        }
        if let Some(level) = &overrides.log_level {
            self.logging.level = level.clone();
        }
    }
}

fn default_batch_deadline_ms() -> u64 {
    10_000
}

fn default_worker_pool_size() -> usize {
    8
}

fn default_client_max_idle_secs() -> u64 {
    60
}

fn default_janitor_period_secs() -> u64 {
    15
}

fn default_refresh_interval_secs() -> u64 {
    300
}

fn default_log_level() -> String {
    "info".to_string()
}
