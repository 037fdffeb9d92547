use crate::ports::MountTableRefresher;
use std::sync::OnceLock;
use tracing::warn;

/// Outcome of one peer refresh within a batch.
///
/// `Unknown` is what a task that never ran, or was still running when the
/// batch deadline fired, reports; the orchestrator counts it as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Unknown,
    Success,
    Failure,
}

/// One unit of work in a refresh cycle: ask a single peer to reload its
/// mount table and record whether it did.
///
/// The outcome is written exactly once, by the worker that runs the task,
/// and is only read after the batch join point. A task abandoned at the
/// deadline may still set its outcome later; the cycle that owned it has
/// already finalized and never looks again.
pub struct RefreshTask {
    admin_address: String,
    outcome: OnceLock<bool>,
}

impl RefreshTask {
    pub fn new(admin_address: impl Into<String>) -> Self {
        Self {
            admin_address: admin_address.into(),
            outcome: OnceLock::new(),
        }
    }

    pub fn admin_address(&self) -> &str {
        &self.admin_address
    }

    /// Invoke the peer's refresh operation. A `false` return and a raised
    /// error are treated identically as failure; errors are logged here and
    /// never reach the orchestrator.
    pub async fn run(&self, refresher: &dyn MountTableRefresher) {
        let refreshed = match refresher.refresh(&self.admin_address).await {
            Ok(refreshed) => refreshed,
            Err(e) => {
                warn!(peer = %self.admin_address, error = %e, "Mount table refresh failed");
                false
            }
        };
        let _ = self.outcome.set(refreshed);
    }

    pub fn outcome(&self) -> RefreshOutcome {
        match self.outcome.get() {
            None => RefreshOutcome::Unknown,
            Some(true) => RefreshOutcome::Success,
            Some(false) => RefreshOutcome::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome() == RefreshOutcome::Success
    }
}
