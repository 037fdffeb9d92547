use serde::{Deserialize, Serialize};

/// One known peer router, as reported by the directory.
///
/// An empty admin address means the peer runs with its admin API disabled;
/// such peers are skipped when building a refresh batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PeerRecord {
    pub admin_address: String,
}

impl PeerRecord {
    pub fn new(admin_address: impl Into<String>) -> Self {
        Self {
            admin_address: admin_address.into(),
        }
    }

    pub fn has_admin_api(&self) -> bool {
        !self.admin_address.is_empty()
    }
}
