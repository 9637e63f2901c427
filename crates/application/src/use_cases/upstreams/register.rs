use crate::ports::{GeoLocator, UpstreamDirectory};
use geo_dns_cache_domain::config::UpstreamEntry;
use geo_dns_cache_domain::{DomainError, UpstreamServer};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case: load the configured upstream list into the directory.
///
/// Runs once at startup. Each entry is upserted with its position in the
/// list as rank, so running it again on restart updates rather than
/// duplicates. An address listed twice ends up with its last position and
/// settings.
pub struct RegisterUpstreamsUseCase {
    directory: Arc<dyn UpstreamDirectory>,
    locator: Arc<dyn GeoLocator>,
}

impl RegisterUpstreamsUseCase {
    pub fn new(directory: Arc<dyn UpstreamDirectory>, locator: Arc<dyn GeoLocator>) -> Self {
        Self { directory, locator }
    }

    pub async fn execute(&self, entries: &[UpstreamEntry]) -> Result<u64, DomainError> {
        for (rank, entry) in entries.iter().enumerate() {
            let location = entry
                .configured_location()
                .or_else(|| self.locator.locate(entry.address))
                .ok_or_else(|| DomainError::UpstreamLocationUnavailable(entry.address.to_string()))?;

            let server = UpstreamServer::new(entry.address, entry.port, location, rank as i64);
            self.directory.upsert(&server).await?;

            debug!(
                address = %server.address,
                port = server.port,
                longitude = location.longitude,
                latitude = location.latitude,
                rank = server.rank,
                "Upstream registered"
            );
        }

        let total = self.directory.count().await?;
        if total == 0 {
            return Err(DomainError::NoUpstreamServers);
        }

        info!(configured = entries.len(), total, "Upstream directory ready");
        Ok(total)
    }
}
