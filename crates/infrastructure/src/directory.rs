use async_trait::async_trait;
use routegrid_application::ports::PeerDirectory;
use routegrid_domain::{DomainError, PeerRecord};

/// Directory backed by the configured peer list. Stands in for a real
/// membership service; the orchestrator only ever sees the port.
pub struct StaticPeerDirectory {
    peers: Vec<PeerRecord>,
}

impl StaticPeerDirectory {
    pub fn new(peers: Vec<PeerRecord>) -> Self {
        Self { peers }
    }

    pub fn from_addresses(admin_addresses: &[String]) -> Self {
        Self::new(
            admin_addresses
                .iter()
                .map(|address| PeerRecord::new(address.as_str()))
                .collect(),
        )
    }
}

#[async_trait]
impl PeerDirectory for StaticPeerDirectory {
    async fn list_peers(&self) -> Result<Vec<PeerRecord>, DomainError> {
        Ok(self.peers.clone())
    }
}
