//! Error types for the store

use thiserror::Error;

/// Errors raised by store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted record could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Data directory creation failed
    #[error("Data directory creation failed: {0}")]
    DirCreation(String),
}
