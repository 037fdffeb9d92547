use crate::{ClientCacheJanitorJob, MountTableRefreshJob};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub trait SpawnableJob: Send + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()>;
}

macro_rules! impl_spawnable_job {
    ($t:ty) => {
        impl SpawnableJob for $t {
            fn with_cancellation(self, token: CancellationToken) -> Self {
                self.with_cancellation(token)
            }

            fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
                tokio::spawn(async move { self.start().await })
            }
        }
    };
}

impl_spawnable_job!(ClientCacheJanitorJob);
impl_spawnable_job!(MountTableRefreshJob);

fn spawn_job<J: SpawnableJob>(job: Option<J>, shutdown: &Option<CancellationToken>) {
    if let Some(job) = job {
        let job = match shutdown {
            Some(token) => job.with_cancellation(token.clone()),
            None => job,
        };
        Arc::new(job).start_job();
    }
}

pub struct JobRunner {
    client_cache_janitor: Option<ClientCacheJanitorJob>,
    mount_table_refresh: Option<MountTableRefreshJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            client_cache_janitor: None,
            mount_table_refresh: None,
            shutdown: None,
        }
    }

    pub fn with_client_cache_janitor(mut self, job: ClientCacheJanitorJob) -> Self {
        self.client_cache_janitor = Some(job);
        self
    }

    pub fn with_mount_table_refresh(mut self, job: MountTableRefreshJob) -> Self {
        self.mount_table_refresh = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub async fn start(self) {
        info!("Starting background job runner");

        spawn_job(self.client_cache_janitor, &self.shutdown);
        spawn_job(self.mount_table_refresh, &self.shutdown);

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
