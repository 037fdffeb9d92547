use crate::admin::cache::AdminClientCache;
use async_trait::async_trait;
use routegrid_application::ports::MountTableRefresher;
use routegrid_domain::DomainError;
use std::sync::Arc;

/// Refreshes a remote peer through its cached admin client.
pub struct RemoteMountTableRefresher {
    clients: Arc<AdminClientCache>,
}

impl RemoteMountTableRefresher {
    pub fn new(clients: Arc<AdminClientCache>) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl MountTableRefresher for RemoteMountTableRefresher {
    async fn refresh(&self, admin_address: &str) -> Result<bool, DomainError> {
        let client = self.clients.get_or_create(admin_address)?;
        client.refresh_mount_table().await
    }
}
