use crate::CacheRetentionJob;
use std::sync::Arc;
use tracing::info;

/// Central orchestrator for background jobs.
///
/// Register jobs with the builder methods, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// JobRunner::new()
///     .with_cache_retention(CacheRetentionJob::new(purge).with_interval(300))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    cache_retention: Option<CacheRetentionJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            cache_retention: None,
        }
    }

    pub fn with_cache_retention(mut self, job: CacheRetentionJob) -> Self {
        self.cache_retention = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.cache_retention {
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
