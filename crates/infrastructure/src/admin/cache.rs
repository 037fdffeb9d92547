use crate::admin::client::{AdminClient, AdminClientConnector};
use async_trait::async_trait;
use dashmap::DashMap;
use routegrid_application::ports::{AdminClientCachePort, CacheSweepOutcome};
use routegrid_domain::DomainError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

struct CacheEntry {
    client: Arc<dyn AdminClient>,
    last_touched: Instant,
}

/// Keyed cache of admin clients, one per peer admin address.
///
/// Shared between the refresh orchestrator (creates and invalidates
/// entries) and the janitor (sweeps idle ones); every operation is
/// per-key linearizable through the dashmap shard locks. Client handles
/// are closed when their entry is removed; a close failure is logged and
/// never blocks the removal of other entries.
pub struct AdminClientCache {
    entries: DashMap<String, CacheEntry>,
    connector: Arc<dyn AdminClientConnector>,
    max_idle: Duration,
}

impl AdminClientCache {
    pub fn new(connector: Arc<dyn AdminClientConnector>, max_idle: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            connector,
            max_idle,
        }
    }

    /// Returns the cached client for `admin_address`, creating and storing
    /// one if absent. The entry lock guarantees at most one client is
    /// constructed per key, even under racing calls.
    pub fn get_or_create(&self, admin_address: &str) -> Result<Arc<dyn AdminClient>, DomainError> {
        match self.entries.entry(admin_address.to_string()) {
            dashmap::Entry::Occupied(mut entry) => {
                entry.get_mut().last_touched = Instant::now();
                Ok(Arc::clone(&entry.get().client))
            }
            dashmap::Entry::Vacant(slot) => {
                let client = self.connector.connect(admin_address)?;
                slot.insert(CacheEntry {
                    client: Arc::clone(&client),
                    last_touched: Instant::now(),
                });
                debug!(peer = %admin_address, "Created admin client");
                Ok(client)
            }
        }
    }

    /// Removes and closes the entry for `admin_address`. Returns whether
    /// one existed; calling again, or for an address never cached, is a
    /// no-op.
    pub fn invalidate(&self, admin_address: &str) -> bool {
        match self.entries.remove(admin_address) {
            Some((address, entry)) => {
                close_entry(&address, &entry);
                true
            }
            None => false,
        }
    }

    /// Removes and closes every entry idle longer than the configured
    /// max-live-time. Expiry is re-checked under the shard lock, so a key
    /// touched between the scan and the removal survives.
    pub fn sweep(&self) -> CacheSweepOutcome {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.value().last_touched.elapsed() >= self.max_idle)
            .map(|entry| entry.key().clone())
            .collect();

        let mut entries_removed = 0;
        for address in expired {
            let removed = self
                .entries
                .remove_if(&address, |_, entry| {
                    entry.last_touched.elapsed() >= self.max_idle
                });
            if let Some((address, entry)) = removed {
                close_entry(&address, &entry);
                entries_removed += 1;
            }
        }

        CacheSweepOutcome {
            entries_removed,
            cache_size: self.entries.len(),
        }
    }

    /// Closes and drops every remaining entry. The cache stays usable
    /// structurally, but callers treat this as teardown.
    pub fn shutdown(&self) {
        let addresses: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        let mut closed = 0;
        for address in addresses {
            if let Some((address, entry)) = self.entries.remove(&address) {
                close_entry(&address, &entry);
                closed += 1;
            }
        }
        info!(closed, "Admin client cache shut down");
    }

    /// Pre-populates the cache with a client per address. A connect
    /// failure skips that peer and never aborts the rest.
    pub fn prewarm(&self, admin_addresses: &[String]) {
        for address in admin_addresses {
            if address.is_empty() {
                continue;
            }
            if let Err(e) = self.get_or_create(address) {
                warn!(peer = %address, error = %e, "Failed to prewarm admin client");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, admin_address: &str) -> bool {
        self.entries.contains_key(admin_address)
    }
}

fn close_entry(address: &str, entry: &CacheEntry) {
    if let Err(e) = entry.client.close() {
        warn!(peer = %address, error = %e, "Failed to close admin client");
    }
}

#[async_trait]
impl AdminClientCachePort for AdminClientCache {
    async fn invalidate(&self, admin_address: &str) -> bool {
        AdminClientCache::invalidate(self, admin_address)
    }

    async fn sweep(&self) -> Result<CacheSweepOutcome, DomainError> {
        Ok(AdminClientCache::sweep(self))
    }

    async fn shutdown(&self) {
        AdminClientCache::shutdown(self)
    }
}
