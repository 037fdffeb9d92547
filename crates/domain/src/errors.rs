use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Peer directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Failed to create admin client for {address}: {reason}")]
    ClientConnect { address: String, reason: String },

    #[error("Admin RPC to {address} failed: {reason}")]
    RpcFailed { address: String, reason: String },

    #[error("Failed to close admin client for {0}")]
    ClientClose(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
