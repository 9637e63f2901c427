#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use geo_dns_cache_application::ports::AnswerCache;
use geo_dns_cache_domain::dns_question::{CLASS_IN, TYPE_A};
use geo_dns_cache_domain::{
    AnswerRecord, CachedAnswer, DnsQuestion, DomainError, DEFAULT_ANSWER_RETENTION,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock AnswerCache
// ============================================================================

pub struct MockAnswerCache {
    entries: Arc<RwLock<Vec<CachedAnswer>>>,
    purge_calls: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockAnswerCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            purge_calls: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn with_entries(entries: Vec<CachedAnswer>) -> Self {
        let cache = Self::new();
        *cache.entries.write().await = entries;
        cache
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }

    pub fn purge_calls(&self) -> u64 {
        self.purge_calls.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl AnswerCache for MockAnswerCache {
    async fn lookup(&self, question: &DnsQuestion) -> Result<Vec<AnswerRecord>, DomainError> {
        let now = Utc::now();
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| &e.question == question && !e.is_expired(now, DEFAULT_ANSWER_RETENTION))
            .map(|e| e.answer.clone())
            .collect())
    }

    async fn store(
        &self,
        question: &DnsQuestion,
        answers: &[AnswerRecord],
    ) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        for answer in answers {
            entries.push(CachedAnswer::new(question.clone(), answer.clone(), Utc::now()));
        }
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, DomainError> {
        self.purge_calls.fetch_add(1, Ordering::Relaxed);

        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("Mock error".to_string()));
        }

        let now = Utc::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| !e.is_expired(now, DEFAULT_ANSWER_RETENTION));
        Ok((before - entries.len()) as u64)
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn make_entry(name: &str, created_at: DateTime<Utc>) -> CachedAnswer {
    CachedAnswer::new(
        DnsQuestion::new(CLASS_IN, TYPE_A, name),
        AnswerRecord::new(Bytes::from_static(&[127, 0, 0, 1])),
        created_at,
    )
}

pub fn make_fresh_entry(name: &str) -> CachedAnswer {
    make_entry(name, Utc::now() - ChronoDuration::minutes(5))
}

pub fn make_old_entry(name: &str, hours_old: i64) -> CachedAnswer {
    make_entry(name, Utc::now() - ChronoDuration::hours(hours_old))
}
