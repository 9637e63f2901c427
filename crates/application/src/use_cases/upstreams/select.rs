use crate::ports::{GeoLocator, UpstreamDirectory};
use geo_dns_cache_domain::{DomainError, UpstreamServer};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Use case: pick the upstream for a client.
///
/// Geolocated clients get the closest server; everyone else (private,
/// loopback, unknown) gets the highest-priority one.
pub struct SelectUpstreamUseCase {
    directory: Arc<dyn UpstreamDirectory>,
    locator: Arc<dyn GeoLocator>,
}

impl SelectUpstreamUseCase {
    pub fn new(directory: Arc<dyn UpstreamDirectory>, locator: Arc<dyn GeoLocator>) -> Self {
        Self { directory, locator }
    }

    pub async fn execute(&self, client: IpAddr) -> Result<UpstreamServer, DomainError> {
        let point = self.locator.locate(client);

        let server = self
            .directory
            .nearest(point)
            .await?
            .ok_or(DomainError::NoUpstreamServers)?;

        debug!(
            client = %client,
            geolocated = point.is_some(),
            upstream = %server.socket_addr(),
            rank = server.rank,
            "Upstream selected"
        );

        Ok(server)
    }
}
