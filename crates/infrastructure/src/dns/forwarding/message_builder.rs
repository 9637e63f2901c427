//! DNS Message Builder
//!
//! Constructs the wire-format messages the proxy sends: single-question
//! queries to upstreams and aggregated responses to clients.

use super::query_parser::InboundQuery;
use super::record_codec::RecordCodec;
use geo_dns_cache_domain::{AnswerRecord, DnsQuestion, DomainError};
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use tracing::warn;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive query carrying exactly one question.
    ///
    /// Returns the message ID together with the wire bytes so the caller can
    /// match the reply.
    pub fn build_query(question: &DnsQuestion) -> Result<(u16, Vec<u8>), DomainError> {
        let query = RecordCodec::query_from_question(question)?;

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Build the client response: original ID and question section, the
    /// aggregated answers in order.
    ///
    /// Answers that cannot be decoded are skipped rather than failing the
    /// whole response.
    pub fn build_response(
        request: &InboundQuery,
        answers: &[AnswerRecord],
    ) -> Result<Vec<u8>, DomainError> {
        let mut message = Message::new(request.id, MessageType::Response, request.op_code);
        message.set_recursion_desired(request.recursion_desired);
        message.set_recursion_available(true);
        message.set_response_code(ResponseCode::NoError);
        message.add_queries(request.queries.iter().cloned());

        let records = answers
            .iter()
            .filter_map(|answer| match RecordCodec::decode_answer(answer) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(error = %e, "Dropping undecodable answer");
                    None
                }
            })
            .collect::<Vec<_>>();
        message.add_answers(records);

        Self::serialize_message(&message)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message
            .emit(&mut encoder)
            .map_err(|e| DomainError::MessageEncoding(e.to_string()))?;

        Ok(buf)
    }
}
