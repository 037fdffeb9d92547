use async_trait::async_trait;
use routegrid_domain::DomainError;

/// Outcome of one janitor sweep over the admin client cache.
#[derive(Debug, Default, Clone)]
pub struct CacheSweepOutcome {
    pub entries_removed: usize,
    pub cache_size: usize,
}

/// Port for the admin client cache as seen by the orchestrator and the
/// janitor: eviction only. Client creation stays behind the refresher
/// adapter that owns the cache.
#[async_trait]
pub trait AdminClientCachePort: Send + Sync {
    /// Remove and release the client for `admin_address`. Returns whether
    /// an entry existed. Safe to call for addresses never cached.
    async fn invalidate(&self, admin_address: &str) -> bool;

    /// Remove and release every entry idle longer than the configured
    /// max-live-time.
    async fn sweep(&self) -> Result<CacheSweepOutcome, DomainError>;

    /// Release every remaining entry. Called once at service teardown.
    async fn shutdown(&self);
}
