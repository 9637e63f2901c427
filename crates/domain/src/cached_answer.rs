use crate::DnsQuestion;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Cached answers are kept for 24 hours.
pub const DEFAULT_ANSWER_RETENTION: Duration = Duration::from_secs(86_400);

/// One resource record in DNS wire format.
///
/// The payload is opaque outside the codec; the cache stores and returns it
/// byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord(pub Bytes);

impl AnswerRecord {
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self(payload.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct CachedAnswer {
    pub question: DnsQuestion,
    pub answer: AnswerRecord,
    pub created_at: DateTime<Utc>,
}

impl CachedAnswer {
    pub fn new(question: DnsQuestion, answer: AnswerRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            question,
            answer,
            created_at,
        }
    }

    /// An entry is live while `now - created_at < retention`.
    pub fn is_expired(&self, now: DateTime<Utc>, retention: Duration) -> bool {
        match chrono::Duration::from_std(retention) {
            Ok(retention) => now.signed_duration_since(self.created_at) >= retention,
            Err(_) => false,
        }
    }
}
