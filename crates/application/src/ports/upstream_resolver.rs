use async_trait::async_trait;
use geo_dns_cache_domain::{AnswerRecord, DnsQuestion, DomainError, UpstreamServer};

/// Forwards a single question to an upstream resolver and returns the
/// answer section of its reply.
#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    async fn resolve(
        &self,
        server: &UpstreamServer,
        question: &DnsQuestion,
    ) -> Result<Vec<AnswerRecord>, DomainError>;
}
