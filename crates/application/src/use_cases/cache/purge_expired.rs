use crate::ports::AnswerCache;
use geo_dns_cache_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

/// Use case: reclaim storage held by expired cache entries.
/// Lookups already ignore them; this only keeps the table small.
pub struct PurgeExpiredAnswersUseCase {
    cache: Arc<dyn AnswerCache>,
}

impl PurgeExpiredAnswersUseCase {
    pub fn new(cache: Arc<dyn AnswerCache>) -> Self {
        Self { cache }
    }

    pub async fn execute(&self) -> Result<u64, DomainError> {
        let deleted = self.cache.purge_expired().await?;
        debug!(deleted, "Expired answers purged");
        Ok(deleted)
    }
}
