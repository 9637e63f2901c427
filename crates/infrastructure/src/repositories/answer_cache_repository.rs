use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use geo_dns_cache_application::ports::AnswerCache;
use geo_dns_cache_domain::{AnswerRecord, DnsQuestion, DomainError, DEFAULT_ANSWER_RETENTION};
use sqlx::SqlitePool;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Answer cache stored in SQLite.
///
/// Rows are never updated. An entry is visible while
/// `now - created_at < retention`; `purge_expired` removes the rest.
pub struct SqliteAnswerCache {
    pool: SqlitePool,
    retention: Duration,
}

impl SqliteAnswerCache {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_retention(pool, DEFAULT_ANSWER_RETENTION)
    }

    pub fn with_retention(pool: SqlitePool, retention: Duration) -> Self {
        Self { pool, retention }
    }

    fn cutoff_millis(&self, now: DateTime<Utc>) -> i64 {
        let retention_ms = i64::try_from(self.retention.as_millis()).unwrap_or(i64::MAX);
        now.timestamp_millis().saturating_sub(retention_ms)
    }

    pub async fn lookup_at(
        &self,
        question: &DnsQuestion,
        now: DateTime<Utc>,
    ) -> Result<Vec<AnswerRecord>, DomainError> {
        let rows = sqlx::query_as::<_, (Vec<u8>,)>(
            "SELECT answer FROM cached_answers
             WHERE qclass = ? AND qtype = ? AND qname = ? AND created_at > ?
             ORDER BY id ASC",
        )
        .bind(question.class as i64)
        .bind(question.record_type as i64)
        .bind(&*question.name)
        .bind(self.cutoff_millis(now))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, question = %question, "Failed to query cached answers");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows
            .into_iter()
            .map(|(answer,)| AnswerRecord::new(Bytes::from(answer)))
            .collect())
    }

    pub async fn store_at(
        &self,
        question: &DnsQuestion,
        answers: &[AnswerRecord],
        created_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if answers.is_empty() {
            return Ok(());
        }

        let mut sql = String::from(
            "INSERT INTO cached_answers (qclass, qtype, qname, answer, created_at) VALUES ",
        );
        for i in 0..answers.len() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str("(?, ?, ?, ?, ?)");
        }

        let created_at = created_at.timestamp_millis();
        let mut query = sqlx::query(&sql);
        for answer in answers {
            query = query
                .bind(question.class as i64)
                .bind(question.record_type as i64)
                .bind(&*question.name)
                .bind(answer.as_bytes())
                .bind(created_at);
        }

        query.execute(&self.pool).await.map_err(|e| {
            error!(error = %e, question = %question, "Failed to store answers");
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!(question = %question, count = answers.len(), "Answers cached");
        Ok(())
    }

    pub async fn purge_expired_at(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM cached_answers WHERE created_at <= ?")
            .bind(self.cutoff_millis(now))
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to purge expired answers");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl AnswerCache for SqliteAnswerCache {
    #[instrument(skip(self))]
    async fn lookup(&self, question: &DnsQuestion) -> Result<Vec<AnswerRecord>, DomainError> {
        self.lookup_at(question, Utc::now()).await
    }

    #[instrument(skip(self, answers))]
    async fn store(
        &self,
        question: &DnsQuestion,
        answers: &[AnswerRecord],
    ) -> Result<(), DomainError> {
        self.store_at(question, answers, Utc::now()).await
    }

    #[instrument(skip(self))]
    async fn purge_expired(&self) -> Result<u64, DomainError> {
        self.purge_expired_at(Utc::now()).await
    }
}
