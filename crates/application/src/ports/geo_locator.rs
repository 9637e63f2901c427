use geo_dns_cache_domain::GeoPoint;
use std::net::IpAddr;

/// IP → approximate coordinate. A miss is a normal outcome, not an error.
pub trait GeoLocator: Send + Sync {
    fn locate(&self, ip: IpAddr) -> Option<GeoPoint>;
}
