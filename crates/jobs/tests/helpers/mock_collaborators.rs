#![allow(dead_code)]

use async_trait::async_trait;
use routegrid_application::ports::{
    AdminClientCachePort, CacheSweepOutcome, MountTableRefresher, PeerDirectory,
};
use routegrid_domain::{DomainError, PeerRecord};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct MockAdminClientCache {
    sweep_count: Arc<AtomicU64>,
    invalidate_count: Arc<AtomicU64>,
    shutdown_count: Arc<AtomicU64>,
    sweep_should_fail: Arc<RwLock<bool>>,
    sweep_outcome: Arc<RwLock<CacheSweepOutcome>>,
}

impl MockAdminClientCache {
    pub fn new() -> Self {
        Self {
            sweep_count: Arc::new(AtomicU64::new(0)),
            invalidate_count: Arc::new(AtomicU64::new(0)),
            shutdown_count: Arc::new(AtomicU64::new(0)),
            sweep_should_fail: Arc::new(RwLock::new(false)),
            sweep_outcome: Arc::new(RwLock::new(CacheSweepOutcome::default())),
        }
    }

    pub fn with_sweep_outcome(self, outcome: CacheSweepOutcome) -> Self {
        *self.sweep_outcome.try_write().unwrap() = outcome;
        self
    }

    pub fn sweep_count(&self) -> u64 {
        self.sweep_count.load(Ordering::Relaxed)
    }

    pub fn invalidate_count(&self) -> u64 {
        self.invalidate_count.load(Ordering::Relaxed)
    }

    pub fn shutdown_count(&self) -> u64 {
        self.shutdown_count.load(Ordering::Relaxed)
    }

    pub async fn set_sweep_should_fail(&self, fail: bool) {
        *self.sweep_should_fail.write().await = fail;
    }
}

#[async_trait]
impl AdminClientCachePort for MockAdminClientCache {
    async fn invalidate(&self, _admin_address: &str) -> bool {
        self.invalidate_count.fetch_add(1, Ordering::Relaxed);
        false
    }

    async fn sweep(&self) -> Result<CacheSweepOutcome, DomainError> {
        self.sweep_count.fetch_add(1, Ordering::Relaxed);
        if *self.sweep_should_fail.read().await {
            return Err(DomainError::IoError("sweep failed".to_string()));
        }
        Ok(self.sweep_outcome.read().await.clone())
    }

    async fn shutdown(&self) {
        self.shutdown_count.fetch_add(1, Ordering::Relaxed);
    }
}

pub struct MockPeerDirectory {
    peers: Arc<RwLock<Vec<PeerRecord>>>,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockPeerDirectory {
    pub fn with_addresses(addresses: &[&str]) -> Self {
        Self {
            peers: Arc::new(RwLock::new(
                addresses.iter().map(|a| PeerRecord::new(*a)).collect(),
            )),
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl PeerDirectory for MockPeerDirectory {
    async fn list_peers(&self) -> Result<Vec<PeerRecord>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DomainError::DirectoryUnavailable(
                "directory offline".to_string(),
            ));
        }
        Ok(self.peers.read().await.clone())
    }
}

pub struct MockRefresher {
    call_count: Arc<AtomicU64>,
}

impl MockRefresher {
    pub fn new() -> Self {
        Self {
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl MountTableRefresher for MockRefresher {
    async fn refresh(&self, _admin_address: &str) -> Result<bool, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        Ok(true)
    }
}
