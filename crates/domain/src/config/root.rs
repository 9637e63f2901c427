use super::{
    CacheConfig, ConfigError, DatabaseConfig, GeoIpConfig, LoggingConfig, ServerConfig,
    UpstreamEntry,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream resolvers in priority order
    #[serde(default)]
    pub upstreams: Vec<UpstreamEntry>,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub geoip: GeoIpConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values supplied on the command line (or through their environment
/// fallbacks). They win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub geoip_database: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(path) = overrides.database_path {
            self.database.path = path;
        }
        if let Some(path) = overrides.geoip_database {
            self.geoip.database_path = Some(path);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstreams.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[upstreams]] entry is required".to_string(),
            ));
        }

        for entry in &self.upstreams {
            if entry.port == 0 {
                return Err(ConfigError::Validation(format!(
                    "upstream {} has port 0",
                    entry.address
                )));
            }

            if entry.longitude.is_some() != entry.latitude.is_some() {
                return Err(ConfigError::Validation(format!(
                    "upstream {} must set both longitude and latitude, or neither",
                    entry.address
                )));
            }

            if let Some(location) = entry.configured_location() {
                if !location.is_valid() {
                    return Err(ConfigError::Validation(format!(
                        "upstream {} has an out-of-range location ({}, {})",
                        entry.address, location.longitude, location.latitude
                    )));
                }
            }
        }

        if self.cache.retention_secs == 0 {
            return Err(ConfigError::Validation(
                "cache.retention_secs must be greater than 0".to_string(),
            ));
        }
        if self.cache.purge_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "cache.purge_interval_secs must be greater than 0".to_string(),
            ));
        }
        if self.cache.upstream_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "cache.upstream_timeout_ms must be greater than 0".to_string(),
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}
