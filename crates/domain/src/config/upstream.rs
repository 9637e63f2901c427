use crate::GeoPoint;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// One `[[upstreams]]` entry. Entries are ranked in file order.
///
/// When `longitude`/`latitude` are omitted the location is looked up in the
/// GeoIP database at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamEntry {
    pub address: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub latitude: Option<f64>,
}

impl UpstreamEntry {
    pub fn new(address: IpAddr, port: u16) -> Self {
        Self {
            address,
            port,
            longitude: None,
            latitude: None,
        }
    }

    pub fn with_location(mut self, longitude: f64, latitude: f64) -> Self {
        self.longitude = Some(longitude);
        self.latitude = Some(latitude);
        self
    }

    pub fn configured_location(&self) -> Option<GeoPoint> {
        match (self.longitude, self.latitude) {
            (Some(lon), Some(lat)) => Some(GeoPoint::new(lon, lat)),
            _ => None,
        }
    }
}

fn default_port() -> u16 {
    53
}
