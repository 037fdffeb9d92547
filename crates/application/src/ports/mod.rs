mod client_cache;
mod mount_table_refresher;
mod peer_directory;

pub use client_cache::{AdminClientCachePort, CacheSweepOutcome};
pub use mount_table_refresher::MountTableRefresher;
pub use peer_directory::PeerDirectory;

// Re-export for convenience
pub use routegrid_domain::PeerRecord;
