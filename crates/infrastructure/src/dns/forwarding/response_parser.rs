use super::record_codec::RecordCodec;
use geo_dns_cache_domain::{AnswerRecord, DomainError};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use tracing::debug;

/// The parts of an upstream reply the proxy uses.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub id: u16,
    pub rcode: ResponseCode,
    /// Answer section, one standalone wire-format record each
    pub answers: Vec<AnswerRecord>,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<UpstreamReply, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "Upstream sent a query instead of a response".to_string(),
            ));
        }

        let answers = message
            .answers()
            .iter()
            .map(RecordCodec::encode_answer)
            .collect::<Result<Vec<_>, _>>()?;

        let rcode = message.response_code();

        debug!(
            id = message.id(),
            rcode = ?rcode,
            answers = answers.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(UpstreamReply {
            id: message.id(),
            rcode,
            answers,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
