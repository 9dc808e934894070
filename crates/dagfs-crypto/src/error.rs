use thiserror::Error;

/// Errors from integrity verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// The recomputed digest of a block does not match its multihash.
    #[error("hash mismatch: expected {expected}, computed {actual}")]
    HashMismatch { expected: String, actual: String },
}

/// Convenience alias for verification results.
pub type VerifyResult<T> = Result<T, VerifyError>;
