use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// How long a cached answer is served, in seconds (default: 86400)
    #[serde(default = "default_retention_secs")]
    pub retention_secs: u64,

    /// How often expired answers are physically deleted, in seconds (default: 300)
    #[serde(default = "default_purge_interval_secs")]
    pub purge_interval_secs: u64,

    /// Upstream reply deadline, in milliseconds (default: 2000)
    #[serde(default = "default_upstream_timeout_ms")]
    pub upstream_timeout_ms: u64,
}

impl CacheConfig {
    pub fn retention(&self) -> Duration {
        Duration::from_secs(self.retention_secs)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            retention_secs: default_retention_secs(),
            purge_interval_secs: default_purge_interval_secs(),
            upstream_timeout_ms: default_upstream_timeout_ms(),
        }
    }
}

fn default_retention_secs() -> u64 {
    86_400
}

fn default_purge_interval_secs() -> u64 {
    300
}

fn default_upstream_timeout_ms() -> u64 {
    2000
}
