use async_trait::async_trait;
use geo_dns_cache_domain::{DomainError, GeoPoint, UpstreamServer};

#[async_trait]
pub trait UpstreamDirectory: Send + Sync {
    /// Insert or replace the server with the same address
    async fn upsert(&self, server: &UpstreamServer) -> Result<(), DomainError>;

    /// Closest server to `point`, or the lowest rank when `point` is `None`.
    /// `Ok(None)` only when the directory is empty.
    async fn nearest(&self, point: Option<GeoPoint>) -> Result<Option<UpstreamServer>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// All servers ordered by rank
    async fn all(&self) -> Result<Vec<UpstreamServer>, DomainError>;
}
