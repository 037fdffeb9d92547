use async_trait::async_trait;
use routegrid_domain::DomainError;

/// Port for asking one peer to reload its mount table cache.
///
/// `Ok(true)` means the peer refreshed, `Ok(false)` means it declined or
/// reported failure. The call may block arbitrarily long; the orchestrator
/// bounds the batch, not the individual call.
#[async_trait]
pub trait MountTableRefresher: Send + Sync {
    async fn refresh(&self, admin_address: &str) -> Result<bool, DomainError>;
}
