use async_trait::async_trait;
use routegrid_domain::{DomainError, PeerRecord};

/// Port for the directory that enumerates peer admin endpoints.
///
/// Queried once at the start of each refresh cycle; a failure here fails
/// the whole cycle fast, since there is nothing to refresh.
#[async_trait]
pub trait PeerDirectory: Send + Sync {
    async fn list_peers(&self) -> Result<Vec<PeerRecord>, DomainError>;
}
