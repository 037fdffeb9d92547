use routegrid_application::use_cases::RefreshMountTableUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 300;

/// Drives one refresh cycle per interval. Cycles are awaited before the
/// next tick, so they never overlap.
pub struct MountTableRefreshJob {
    refresh: Arc<RefreshMountTableUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl MountTableRefreshJob {
    pub fn new(refresh: Arc<RefreshMountTableUseCase>) -> Self {
        Self {
            refresh,
            interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting mount table refresh job"
        );

        let job = Arc::clone(&self);
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(job.interval_secs));
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        info!("MountTableRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match job.refresh.execute().await {
                            Ok(summary) => {
                                debug!(
                                    success_count = summary.success_count,
                                    failure_count = summary.failure_count,
                                    deadline_exceeded = summary.deadline_exceeded,
                                    "Refresh cycle completed"
                                );
                            }
                            Err(e) => {
                                error!(error = %e, "Refresh cycle failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
