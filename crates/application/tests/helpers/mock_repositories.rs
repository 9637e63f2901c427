#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use geo_dns_cache_application::ports::{
    AnswerCache, GeoLocator, UpstreamDirectory, UpstreamResolver,
};
use geo_dns_cache_domain::{
    AnswerRecord, CachedAnswer, DnsQuestion, DomainError, GeoPoint, UpstreamServer,
    DEFAULT_ANSWER_RETENTION,
};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

// ============================================================================
// Mock UpstreamDirectory
// ============================================================================

pub struct MockUpstreamDirectory {
    servers: Arc<RwLock<Vec<UpstreamServer>>>,
}

impl MockUpstreamDirectory {
    pub fn new() -> Self {
        Self {
            servers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn with_servers(servers: Vec<UpstreamServer>) -> Self {
        Self {
            servers: Arc::new(RwLock::new(servers)),
        }
    }

    pub async fn servers(&self) -> Vec<UpstreamServer> {
        self.servers.read().await.clone()
    }
}

#[async_trait]
impl UpstreamDirectory for MockUpstreamDirectory {
    async fn upsert(&self, server: &UpstreamServer) -> Result<(), DomainError> {
        let mut servers = self.servers.write().await;
        match servers.iter_mut().find(|s| s.address == server.address) {
            Some(existing) => *existing = server.clone(),
            None => servers.push(server.clone()),
        }
        Ok(())
    }

    async fn nearest(&self, point: Option<GeoPoint>) -> Result<Option<UpstreamServer>, DomainError> {
        let servers = self.servers.read().await;
        Ok(UpstreamServer::select_nearest(servers.iter(), point.as_ref()).cloned())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.servers.read().await.len() as u64)
    }

    async fn all(&self) -> Result<Vec<UpstreamServer>, DomainError> {
        let mut servers = self.servers.read().await.clone();
        servers.sort_by_key(|s| s.rank);
        Ok(servers)
    }
}

// ============================================================================
// Mock AnswerCache
// ============================================================================

pub struct MockAnswerCache {
    entries: Arc<RwLock<Vec<CachedAnswer>>>,
    store_calls: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockAnswerCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            store_calls: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn insert_at(
        &self,
        question: &DnsQuestion,
        answer: AnswerRecord,
        created_at: DateTime<Utc>,
    ) {
        self.entries
            .write()
            .await
            .push(CachedAnswer::new(question.clone(), answer, created_at));
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }

    pub fn store_calls(&self) -> u64 {
        self.store_calls.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl AnswerCache for MockAnswerCache {
    async fn lookup(&self, question: &DnsQuestion) -> Result<Vec<AnswerRecord>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("cache unavailable".to_string()));
        }
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
        self.store_calls.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("cache unavailable".to_string()));
        }
        let now = Utc::now();
        let mut entries = self.entries.write().await;
        for answer in answers {
            entries.push(CachedAnswer::new(question.clone(), answer.clone(), now));
        }
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, DomainError> {
        let now = Utc::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| !e.is_expired(now, DEFAULT_ANSWER_RETENTION));
        Ok((before - entries.len()) as u64)
    }
}

// ============================================================================
// Mock GeoLocator
// ============================================================================

pub struct MockGeoLocator {
    points: HashMap<IpAddr, GeoPoint>,
    call_count: AtomicU64,
}

impl MockGeoLocator {
    pub fn new() -> Self {
        Self {
            points: HashMap::new(),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn with_point(mut self, ip: &str, longitude: f64, latitude: f64) -> Self {
        self.points
            .insert(ip.parse().unwrap(), GeoPoint::new(longitude, latitude));
        self
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl GeoLocator for MockGeoLocator {
    fn locate(&self, ip: IpAddr) -> Option<GeoPoint> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.points.get(&ip).copied()
    }
}

// ============================================================================
// Mock UpstreamResolver
// ============================================================================

pub struct MockUpstreamResolver {
    responses: Mutex<HashMap<Arc<str>, Vec<AnswerRecord>>>,
    failing: Mutex<Vec<Arc<str>>>,
    calls: Mutex<Vec<(IpAddr, DnsQuestion)>>,
}

impl MockUpstreamResolver {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            failing: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_response(&self, name: &str, answers: Vec<AnswerRecord>) {
        self.responses
            .lock()
            .unwrap()
            .insert(Arc::from(name), answers);
    }

    pub fn set_failing(&self, name: &str) {
        self.failing.lock().unwrap().push(Arc::from(name));
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(IpAddr, DnsQuestion)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstreamResolver {
    async fn resolve(
        &self,
        server: &UpstreamServer,
        question: &DnsQuestion,
    ) -> Result<Vec<AnswerRecord>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((server.address, question.clone()));

        if self.failing.lock().unwrap().contains(&question.name) {
            return Err(DomainError::QueryTimeout {
                server: server.socket_addr().to_string(),
                timeout_ms: 2000,
            });
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(&question.name)
            .cloned()
            .unwrap_or_default())
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn make_server(ip: &str, longitude: f64, latitude: f64, rank: i64) -> UpstreamServer {
    UpstreamServer::new(ip.parse().unwrap(), 53, GeoPoint::new(longitude, latitude), rank)
}

pub fn a_question(name: &str) -> DnsQuestion {
    DnsQuestion::new(1, 1, name)
}

pub fn answer(tag: &[u8]) -> AnswerRecord {
    AnswerRecord::new(bytes::Bytes::copy_from_slice(tag))
}
