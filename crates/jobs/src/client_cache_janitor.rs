use routegrid_application::ports::AdminClientCachePort;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const DEFAULT_SWEEP_PERIOD_SECS: u64 = 15;

/// Periodically sweeps idle admin clients out of the cache, independent of
/// refresh cycles, for the lifetime of the service.
pub struct ClientCacheJanitorJob {
    cache: Arc<dyn AdminClientCachePort>,
    period_secs: u64,
    shutdown: CancellationToken,
}

impl ClientCacheJanitorJob {
    pub fn new(cache: Arc<dyn AdminClientCachePort>) -> Self {
        Self {
            cache,
            period_secs: DEFAULT_SWEEP_PERIOD_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_period(mut self, period_secs: u64) -> Self {
        self.period_secs = period_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(period_secs = self.period_secs, "Starting client cache janitor");

        let job = Arc::clone(&self);
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(job.period_secs));
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        info!("ClientCacheJanitorJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match job.cache.sweep().await {
                            Ok(outcome) => {
                                if outcome.entries_removed > 0 {
                                    info!(
                                        entries_removed = outcome.entries_removed,
                                        cache_size = outcome.cache_size,
                                        "Evicted idle admin clients"
                                    );
                                } else {
                                    debug!(cache_size = outcome.cache_size, "Janitor sweep found nothing idle");
                                }
                            }
                            Err(e) => {
                                error!(error = %e, "Client cache sweep failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
