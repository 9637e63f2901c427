//! Configuration module for the geo DNS cache
//!
//! - `root`: main configuration, loading and CLI overrides
//! - `server`: listening address and port
//! - `upstream`: ordered upstream resolver list
//! - `cache`: answer retention and upstream timeout
//! - `geoip`: geolocation database
//! - `database`: SQLite store
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod cache;
pub mod database;
pub mod errors;
pub mod geoip;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use geoip::GeoIpConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamEntry;
