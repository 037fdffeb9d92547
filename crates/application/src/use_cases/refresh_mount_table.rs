use crate::ports::{AdminClientCachePort, MountTableRefresher, PeerDirectory};
use crate::use_cases::refresh_task::RefreshTask;
use futures::future::join_all;
use routegrid_domain::{DomainError, RefreshConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

/// Counts for one finished refresh cycle. Tasks still pending at the batch
/// deadline are counted as failures.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub success_count: usize,
    pub failure_count: usize,
    pub deadline_exceeded: bool,
}

/// Use case: refresh the mount table cache of every peer router.
///
/// One call is one cycle: snapshot the directory, fan the refresh out over
/// a bounded worker pool, wait up to a single batch deadline, then settle
/// the books. Every peer that did not verifiably succeed gets its cached
/// admin client invalidated so the next cycle starts from a fresh handle.
///
/// Callers are expected to serialize cycles; overlapping calls are not
/// coordinated here.
pub struct RefreshMountTableUseCase {
    directory: Arc<dyn PeerDirectory>,
    remote: Arc<dyn MountTableRefresher>,
    local: Arc<dyn MountTableRefresher>,
    clients: Arc<dyn AdminClientCachePort>,
    batch_deadline: Duration,
    worker_pool_size: usize,
    local_admin_address: Option<String>,
}

impl RefreshMountTableUseCase {
    pub fn new(
        directory: Arc<dyn PeerDirectory>,
        remote: Arc<dyn MountTableRefresher>,
        local: Arc<dyn MountTableRefresher>,
        clients: Arc<dyn AdminClientCachePort>,
        config: &RefreshConfig,
    ) -> Self {
        Self {
            directory,
            remote,
            local,
            clients,
            batch_deadline: config.batch_deadline(),
            worker_pool_size: config.worker_pool_size.max(1),
            local_admin_address: None,
        }
    }

    pub fn with_local_admin_address(mut self, address: Option<String>) -> Self {
        self.local_admin_address = address;
        self
    }

    pub async fn execute(&self) -> Result<BatchSummary, DomainError> {
        let peers = self.directory.list_peers().await?;

        let tasks: Vec<Arc<RefreshTask>> = peers
            .iter()
            .filter(|peer| peer.has_admin_api())
            .map(|peer| Arc::new(RefreshTask::new(peer.admin_address.clone())))
            .collect();

        if tasks.is_empty() {
            info!("Mount table entries cache refresh successCount=0,failureCount=0");
            return Ok(BatchSummary::default());
        }

        let deadline_exceeded = self.dispatch_and_await(&tasks).await;
        Ok(self.finalize(&tasks, deadline_exceeded).await)
    }

    /// Submit every task to the bounded pool and wait until all finish or
    /// the batch deadline fires, whichever comes first. Workers hold a
    /// semaphore permit while running, so the pool size, not the peer
    /// count, bounds parallelism. Handles dropped at the deadline leave
    /// their tasks running to completion unobserved.
    async fn dispatch_and_await(&self, tasks: &[Arc<RefreshTask>]) -> bool {
        let pool = Arc::new(Semaphore::new(self.worker_pool_size));

        let handles: Vec<_> = tasks
            .iter()
            .map(|task| {
                let task = Arc::clone(task);
                let refresher = self.refresher_for(task.admin_address());
                let pool = Arc::clone(&pool);
                tokio::spawn(async move {
                    let _permit = pool.acquire_owned().await.ok();
                    task.run(refresher.as_ref()).await;
                })
            })
            .collect();

        let deadline_exceeded = tokio::time::timeout(self.batch_deadline, join_all(handles))
            .await
            .is_err();
        if deadline_exceeded {
            warn!("Not all router admins updated their cache");
        }
        deadline_exceeded
    }

    async fn finalize(&self, tasks: &[Arc<RefreshTask>], deadline_exceeded: bool) -> BatchSummary {
        let mut summary = BatchSummary {
            deadline_exceeded,
            ..BatchSummary::default()
        };

        for task in tasks {
            if task.is_success() {
                summary.success_count += 1;
            } else {
                summary.failure_count += 1;
                let removed = self.clients.invalidate(task.admin_address()).await;
                debug!(
                    peer = %task.admin_address(),
                    removed,
                    "Evicted admin client after failed refresh"
                );
            }
        }

        info!(
            "Mount table entries cache refresh successCount={},failureCount={}",
            summary.success_count, summary.failure_count
        );
        summary
    }

    fn refresher_for(&self, admin_address: &str) -> Arc<dyn MountTableRefresher> {
        let is_local = self
            .local_admin_address
            .as_deref()
            .is_some_and(|local| local == admin_address);
        if is_local {
            Arc::clone(&self.local)
        } else {
            Arc::clone(&self.remote)
        }
    }
}
