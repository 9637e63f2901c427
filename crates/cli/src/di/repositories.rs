use geo_dns_cache_application::ports::{AnswerCache, UpstreamDirectory};
use geo_dns_cache_domain::Config;
use geo_dns_cache_infrastructure::repositories::{SqliteAnswerCache, SqliteUpstreamDirectory};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub upstream_directory: Arc<dyn UpstreamDirectory>,
    pub answer_cache: Arc<dyn AnswerCache>,
}

impl Repositories {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            upstream_directory: Arc::new(SqliteUpstreamDirectory::new(pool.clone())),
            answer_cache: Arc::new(SqliteAnswerCache::with_retention(
                pool,
                config.cache.retention(),
            )),
        }
    }
}
