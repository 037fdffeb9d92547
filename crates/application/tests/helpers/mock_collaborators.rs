#![allow(dead_code)]

use async_trait::async_trait;
use routegrid_application::ports::{
    AdminClientCachePort, CacheSweepOutcome, MountTableRefresher, PeerDirectory,
};
use routegrid_domain::{DomainError, PeerRecord};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

pub struct MockPeerDirectory {
    peers: Arc<RwLock<Vec<PeerRecord>>>,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockPeerDirectory {
    pub fn new() -> Self {
        Self {
            peers: Arc::new(RwLock::new(Vec::new())),
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn with_addresses(addresses: &[&str]) -> Self {
        let directory = Self::new();
        let peers = addresses.iter().map(|a| PeerRecord::new(*a)).collect();
        *directory.peers.try_write().unwrap() = peers;
        directory
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

#[derive(Debug, Clone)]
pub enum RefreshBehavior {
    Succeed,
    Decline,
    Fail,
    Slow(Duration),
}

pub struct MockMountTableRefresher {
    behaviors: Arc<RwLock<HashMap<String, RefreshBehavior>>>,
    calls: Arc<Mutex<Vec<String>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockMountTableRefresher {
    pub fn new() -> Self {
        Self {
            behaviors: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn set_behavior(&self, admin_address: &str, behavior: RefreshBehavior) {
        self.behaviors
            .write()
            .await
            .insert(admin_address.to_string(), behavior);
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    /// Highest number of refresh calls observed running at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MountTableRefresher for MockMountTableRefresher {
    async fn refresh(&self, admin_address: &str) -> Result<bool, DomainError> {
        self.calls.lock().await.push(admin_address.to_string());

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        let behavior = self
            .behaviors
            .read()
            .await
            .get(admin_address)
            .cloned()
            .unwrap_or(RefreshBehavior::Succeed);

        let result = match behavior {
            RefreshBehavior::Succeed => Ok(true),
            RefreshBehavior::Decline => Ok(false),
            RefreshBehavior::Fail => Err(DomainError::RpcFailed {
                address: admin_address.to_string(),
                reason: "connection reset".to_string(),
            }),
            RefreshBehavior::Slow(delay) => {
                tokio::time::sleep(delay).await;
                Ok(true)
            }
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

pub struct MockAdminClientCache {
    cached: Arc<RwLock<HashSet<String>>>,
    invalidated: Arc<Mutex<Vec<String>>>,
    sweep_count: Arc<AtomicU64>,
    shutdown_count: Arc<AtomicU64>,
    sweep_should_fail: Arc<RwLock<bool>>,
}

impl MockAdminClientCache {
    pub fn new() -> Self {
        Self {
            cached: Arc::new(RwLock::new(HashSet::new())),
            invalidated: Arc::new(Mutex::new(Vec::new())),
            sweep_count: Arc::new(AtomicU64::new(0)),
            shutdown_count: Arc::new(AtomicU64::new(0)),
            sweep_should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn add_cached(&self, admin_address: &str) {
        self.cached.write().await.insert(admin_address.to_string());
    }

    pub async fn invalidated(&self) -> Vec<String> {
        self.invalidated.lock().await.clone()
    }

    pub fn sweep_count(&self) -> u64 {
        self.sweep_count.load(Ordering::Relaxed)
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
    async fn invalidate(&self, admin_address: &str) -> bool {
        self.invalidated
            .lock()
            .await
            .push(admin_address.to_string());
        self.cached.write().await.remove(admin_address)
    }

    async fn sweep(&self) -> Result<CacheSweepOutcome, DomainError> {
        self.sweep_count.fetch_add(1, Ordering::Relaxed);
        if *self.sweep_should_fail.read().await {
            return Err(DomainError::IoError("sweep failed".to_string()));
        }
        Ok(CacheSweepOutcome {
            entries_removed: 0,
            cache_size: self.cached.read().await.len(),
        })
    }

    async fn shutdown(&self) {
        self.shutdown_count.fetch_add(1, Ordering::Relaxed);
        self.cached.write().await.clear();
    }
}
