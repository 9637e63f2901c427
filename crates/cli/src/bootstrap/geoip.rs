use geo_dns_cache_application::ports::GeoLocator;
use geo_dns_cache_domain::config::GeoIpConfig;
use geo_dns_cache_infrastructure::geo::{DisabledGeoLocator, MaxMindGeoLocator};
use std::sync::Arc;
use tracing::{error, info, warn};

pub fn init_geo_locator(cfg: &GeoIpConfig) -> anyhow::Result<Arc<dyn GeoLocator>> {
    let Some(path) = cfg.database_path.as_deref() else {
        warn!("No GeoIP database configured, every client falls back to the first upstream");
        return Ok(Arc::new(DisabledGeoLocator));
    };

    let locator = MaxMindGeoLocator::open(path).map_err(|e| {
        error!(path, error = %e, "Failed to open GeoIP database");
        anyhow::anyhow!(e)
    })?;

    info!(path, "GeoIP database loaded");
    Ok(Arc::new(locator))
}
