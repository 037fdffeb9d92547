use async_trait::async_trait;
use routegrid_application::ports::MountTableRefresher;
use routegrid_domain::DomainError;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Notify;
use tracing::debug;

/// Refreshes this process's own mount table view, bypassing the network
/// client cache entirely. Each refresh bumps a generation counter and
/// wakes whoever resolves against the local table, which reloads on the
/// next lookup.
#[derive(Default)]
pub struct LocalMountTableRefresher {
    generation: AtomicU64,
    reloaded: Notify,
}

impl LocalMountTableRefresher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Resolves once the next local reload has been requested.
    pub async fn wait_for_reload(&self) {
        self.reloaded.notified().await;
    }
}

#[async_trait]
impl MountTableRefresher for LocalMountTableRefresher {
    async fn refresh(&self, admin_address: &str) -> Result<bool, DomainError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(peer = %admin_address, generation, "Reloading local mount table view");
        self.reloaded.notify_waiters();
        Ok(true)
    }
}
