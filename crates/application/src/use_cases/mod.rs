pub mod refresh_mount_table;
pub mod refresh_task;

// Re-export use cases
pub use refresh_mount_table::{BatchSummary, RefreshMountTableUseCase};
pub use refresh_task::{RefreshOutcome, RefreshTask};
