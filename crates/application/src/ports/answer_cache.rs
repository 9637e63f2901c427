use async_trait::async_trait;
use geo_dns_cache_domain::{AnswerRecord, DnsQuestion, DomainError};

#[async_trait]
pub trait AnswerCache: Send + Sync {
    /// All non-expired answers stored for exactly this question, oldest first
    async fn lookup(&self, question: &DnsQuestion) -> Result<Vec<AnswerRecord>, DomainError>;

    /// Append one entry per answer, timestamped now
    async fn store(&self, question: &DnsQuestion, answers: &[AnswerRecord])
        -> Result<(), DomainError>;

    /// Physically delete expired entries, returning how many were removed
    async fn purge_expired(&self) -> Result<u64, DomainError>;
}
