use geo_dns_cache_application::ports::GeoLocator;
use geo_dns_cache_domain::{DomainError, GeoPoint};
use maxminddb::Reader;
use serde::Deserialize;
use std::net::IpAddr;
use std::path::Path;
use tracing::{debug, info};

/// The subset of a GeoIP2/GeoLite2 City record we read.
#[derive(Debug, Deserialize)]
struct CityRecord {
    location: Option<LocationRecord>,
}

#[derive(Debug, Deserialize)]
struct LocationRecord {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Geolocation backed by a MaxMind City database.
pub struct MaxMindGeoLocator {
    reader: Reader<Vec<u8>>,
}

impl MaxMindGeoLocator {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let reader = Reader::open_readfile(path).map_err(|e| {
            DomainError::IoError(format!(
                "Failed to load GeoIP database {}: {}",
                path.display(),
                e
            ))
        })?;

        info!(
            path = %path.display(),
            database_type = %reader.metadata.database_type,
            "GeoIP database loaded"
        );

        Ok(Self { reader })
    }
}

impl GeoLocator for MaxMindGeoLocator {
    fn locate(&self, ip: IpAddr) -> Option<GeoPoint> {
        let result = self.reader.lookup(ip).ok()?;
        let record: CityRecord = result.decode().ok()??;
        let location = record.location?;

        let point = GeoPoint::new(location.longitude?, location.latitude?);
        if !point.is_valid() {
            debug!(ip = %ip, "GeoIP returned an out-of-range location");
            return None;
        }

        Some(point)
    }
}

/// Used when no GeoIP database is configured: every lookup misses, so every
/// client is served by the highest-priority upstream.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledGeoLocator;

impl GeoLocator for DisabledGeoLocator {
    fn locate(&self, _ip: IpAddr) -> Option<GeoPoint> {
        None
    }
}
