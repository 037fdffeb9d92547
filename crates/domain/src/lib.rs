//! Routegrid Domain Layer
pub mod config;
pub mod errors;
pub mod peer;

pub use config::{CliOverrides, Config, LoggingConfig, PeersConfig, RefreshConfig};
pub use errors::DomainError;
pub use peer::PeerRecord;
