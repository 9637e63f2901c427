//! Conversions between hickory types and the codec-free domain types.

use geo_dns_cache_domain::{AnswerRecord, DnsQuestion, DomainError};
use hickory_proto::op::Query;
use hickory_proto::rr::{DNSClass, Name, Record, RecordType};
use hickory_proto::serialize::binary::{BinDecodable, BinDecoder, BinEncodable};
use std::str::FromStr;

pub struct RecordCodec;

impl RecordCodec {
    /// Encode one record standalone. Compression pointers the encoder emits
    /// can only refer to earlier bytes of the same record, so each encoded
    /// record decodes on its own later.
    pub fn encode_answer(record: &Record) -> Result<AnswerRecord, DomainError> {
        let bytes = record.to_bytes().map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to encode answer record: {}", e))
        })?;
        Ok(AnswerRecord::new(bytes))
    }

    pub fn decode_answer(answer: &AnswerRecord) -> Result<Record, DomainError> {
        Record::from_bytes(answer.as_bytes()).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to decode cached record: {}", e))
        })
    }

    pub fn question_from_query(query: &Query) -> DnsQuestion {
        DnsQuestion::new(
            u16::from(query.query_class()),
            u16::from(query.query_type()),
            &query.name().to_ascii(),
        )
    }

    pub fn query_from_question(question: &DnsQuestion) -> Result<Query, DomainError> {
        let text = if question.name.is_empty() {
            "."
        } else {
            &*question.name
        };
        let name = Name::from_str(text).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", question.name, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordType::from(question.record_type));
        query.set_query_class(Self::dns_class(question.class)?);
        Ok(query)
    }

    /// Classes go through the wire decoder so unknown values survive.
    fn dns_class(value: u16) -> Result<DNSClass, DomainError> {
        let bytes = value.to_be_bytes();
        let mut decoder = BinDecoder::new(&bytes);
        DNSClass::read(&mut decoder)
            .map_err(|e| DomainError::InvalidDnsMessage(format!("Invalid class {}: {}", value, e)))
    }
}
