use serde::{Deserialize, Serialize};

/// Geolocation database configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeoIpConfig {
    /// Path to a MaxMind City database (GeoLite2-City.mmdb or compatible).
    /// Without it every client falls back to the first configured upstream.
    #[serde(default)]
    pub database_path: Option<String>,
}
