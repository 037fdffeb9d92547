pub mod client_cache_janitor;
pub mod mount_table_refresh;
pub mod runner;

pub use client_cache_janitor::ClientCacheJanitorJob;
pub use mount_table_refresh::MountTableRefreshJob;
pub use runner::JobRunner;
