use routegrid_application::use_cases::RefreshMountTableUseCase;
use routegrid_domain::Config;
use routegrid_infrastructure::{
    AdminClientCache, HttpAdminClientConnector, LocalMountTableRefresher,
    RemoteMountTableRefresher, StaticPeerDirectory,
};
use routegrid_jobs::{ClientCacheJanitorJob, JobRunner, MountTableRefreshJob};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Wires the collaborators together: connector -> client cache ->
/// refreshers -> use case -> background jobs.
pub struct Services {
    clients: Arc<AdminClientCache>,
    refresh: Arc<RefreshMountTableUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let connector = Arc::new(HttpAdminClientConnector::new()?);
        let clients = Arc::new(AdminClientCache::new(
            connector,
            config.refresh.client_max_idle(),
        ));

        let directory = Arc::new(StaticPeerDirectory::from_addresses(
            &config.peers.admin_addresses,
        ));
        let remote = Arc::new(RemoteMountTableRefresher::new(Arc::clone(&clients)));
        let local = Arc::new(LocalMountTableRefresher::new());

        let refresh = Arc::new(
            RefreshMountTableUseCase::new(
                directory,
                remote,
                local,
                Arc::clone(&clients) as _,
                &config.refresh,
            )
            .with_local_admin_address(config.peers.local_admin_address.clone()),
        );

        Ok(Self { clients, refresh })
    }

    pub fn prewarm(&self, config: &Config) {
        self.clients.prewarm(&config.peers.admin_addresses);
    }

    pub async fn start_jobs(&self, config: &Config) -> CancellationToken {
        let token = CancellationToken::new();

        JobRunner::new()
            .with_client_cache_janitor(
                ClientCacheJanitorJob::new(Arc::clone(&self.clients) as _)
                    .with_period(config.refresh.janitor_period_secs),
            )
            .with_mount_table_refresh(
                MountTableRefreshJob::new(Arc::clone(&self.refresh))
                    .with_interval(config.refresh.refresh_interval_secs),
            )
            .with_shutdown_token(token.clone())
            .start()
            .await;

        token
    }

    /// Releases every cached admin client. The janitor's schedule has
    /// already been stopped through the shutdown token by this point.
    pub fn shutdown(&self) {
        self.clients.shutdown();
    }
}
