use async_trait::async_trait;
use routegrid_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

/// Long-lived RPC handle to one peer's admin endpoint.
#[async_trait]
pub trait AdminClient: Send + Sync {
    /// Ask the peer to reload its mount table cache. `Ok(true)` means it
    /// did, `Ok(false)` means the peer declined or reported failure.
    async fn refresh_mount_table(&self) -> Result<bool, DomainError>;

    /// Release the handle's resources. Must be safe to call on an already
    /// released handle.
    fn close(&self) -> Result<(), DomainError>;
}

/// Builds admin clients for the cache. Construction is stub creation, not
/// connection establishment, so it is synchronous and cheap; the transport
/// connects lazily on first use.
pub trait AdminClientConnector: Send + Sync {
    fn connect(&self, admin_address: &str) -> Result<Arc<dyn AdminClient>, DomainError>;
}

/// Admin client over the peer's HTTP admin API.
pub struct HttpAdminClient {
    http: reqwest::Client,
    admin_address: String,
}

#[async_trait]
impl AdminClient for HttpAdminClient {
    async fn refresh_mount_table(&self) -> Result<bool, DomainError> {
        let url = format!("http://{}/admin/mount-table/refresh", self.admin_address);
        let response =
            self.http
                .post(&url)
                .send()
                .await
                .map_err(|e| DomainError::RpcFailed {
                    address: self.admin_address.clone(),
                    reason: e.to_string(),
                })?;
        Ok(response.status().is_success())
    }

    fn close(&self) -> Result<(), DomainError> {
        // Pooled connections are torn down when the last clone of the
        // inner client drops.
        debug!(peer = %self.admin_address, "Closing admin client");
        Ok(())
    }
}

/// Connector handing out [`HttpAdminClient`]s that share one connection
/// pool.
#[derive(Clone)]
pub struct HttpAdminClientConnector {
    http: reqwest::Client,
}

impl HttpAdminClientConnector {
    pub fn new() -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;
        Ok(Self { http })
    }
}

impl AdminClientConnector for HttpAdminClientConnector {
    fn connect(&self, admin_address: &str) -> Result<Arc<dyn AdminClient>, DomainError> {
        if admin_address.is_empty() {
            return Err(DomainError::ClientConnect {
                address: admin_address.to_string(),
                reason: "empty admin address".to_string(),
            });
        }
        Ok(Arc::new(HttpAdminClient {
            http: self.http.clone(),
            admin_address: admin_address.to_string(),
        }))
    }
}
