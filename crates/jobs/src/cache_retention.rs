use geo_dns_cache_application::use_cases::PurgeExpiredAnswersUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Periodically deletes cached answers older than the retention window.
pub struct CacheRetentionJob {
    purge: Arc<PurgeExpiredAnswersUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheRetentionJob {
    pub fn new(purge: Arc<PurgeExpiredAnswersUseCase>) -> Self {
        Self {
            purge,
            interval_secs: 300,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting cache retention job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheRetentionJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.purge.execute().await {
                            Ok(0) => {}
                            Ok(deleted) => {
                                info!(deleted, "Expired answers purged");
                            }
                            Err(e) => {
                                error!(error = %e, "Cache retention purge failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
