use super::record_codec::RecordCodec;
use geo_dns_cache_domain::{DnsQuestion, DomainError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};

/// A decoded client query.
#[derive(Debug, Clone)]
pub struct InboundQuery {
    pub id: u16,
    pub op_code: OpCode,
    pub recursion_desired: bool,
    /// Question section as received, echoed back in the response
    pub queries: Vec<Query>,
    /// The same questions as cache keys
    pub questions: Vec<DnsQuestion>,
}

pub struct QueryParser;

impl QueryParser {
    pub fn parse(datagram: &[u8]) -> Result<InboundQuery, DomainError> {
        let message = Message::from_vec(datagram).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to parse DNS query: {}", e))
        })?;

        if message.message_type() != MessageType::Query {
            return Err(DomainError::InvalidDnsMessage(
                "Datagram is a response, not a query".to_string(),
            ));
        }

        let queries = message.queries().to_vec();
        let questions = queries.iter().map(RecordCodec::question_from_query).collect();

        Ok(InboundQuery {
            id: message.id(),
            op_code: message.op_code(),
            recursion_desired: message.recursion_desired(),
            queries,
            questions,
        })
    }
}
