//! Error handling for the streaming digest pipeline

use thiserror::Error;

/// Errors surfaced by a digest computation.
///
/// Every variant is fatal to the call that produced it: no digest is
/// returned, no fallback algorithm is substituted, and the hash state is
/// released before the error propagates.
#[derive(Debug, Error)]
pub enum HashError {
    /// Algorithm name not in the accepted set; the offending string is echoed
    #[error("unsupported hash algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// Hash state could not be allocated
    #[error("hash state allocation failed: {0}")]
    StateAllocation(String),

    /// Seed/reset step failed after a successful allocation
    #[error("hash state initialisation failed: {0}")]
    Init(String),

    /// A byte or block write into the hash state failed mid-serialization
    #[error("hash state update failed: {0}")]
    Update(String),

    /// The external serializer failed, independent of hashing
    #[error("serializer failed: {0}")]
    Serializer(String),
}

/// Result type for digest operations
pub type Result<T> = std::result::Result<T, HashError>;
