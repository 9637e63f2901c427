use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::UdpTransport;
use async_trait::async_trait;
use geo_dns_cache_application::ports::UpstreamResolver;
use geo_dns_cache_domain::{AnswerRecord, DnsQuestion, DomainError, UpstreamServer};
use std::time::Duration;
use tracing::{debug, warn};

/// Forwards one question per message over UDP, with a bounded wait.
pub struct UdpUpstreamResolver {
    timeout: Duration,
}

impl UdpUpstreamResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl UpstreamResolver for UdpUpstreamResolver {
    async fn resolve(
        &self,
        server: &UpstreamServer,
        question: &DnsQuestion,
    ) -> Result<Vec<AnswerRecord>, DomainError> {
        let (id, query_bytes) = MessageBuilder::build_query(question)?;

        let transport = UdpTransport::new(server.socket_addr());
        let response_bytes = transport.send(&query_bytes, self.timeout).await?;

        let reply = ResponseParser::parse(&response_bytes)?;

        if reply.id != id {
            warn!(
                expected = id,
                received = reply.id,
                upstream = %server.socket_addr(),
                "Upstream reply ID mismatch"
            );
        }

        debug!(
            question = %question,
            upstream = %server.socket_addr(),
            status = ResponseParser::rcode_to_status(reply.rcode),
            answers = reply.answers.len(),
            "Upstream replied"
        );

        Ok(reply.answers)
    }
}
