use std::path::PathBuf;
use thiserror::Error;

/// Domain-level errors for key generation and export
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Usage(String),

    #[error("Cryptographic operation failed: {0}")]
    CryptoError(String),

    #[error("OpenSSH encoding failed: {0}")]
    Ssh(#[from] ssh_key::Error),

    #[error("Invalid age key: {0}")]
    AgeKey(String),

    #[error("Failed to write {}: {}", .path.display(), .source)]
    KeyWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
