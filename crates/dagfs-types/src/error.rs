use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// A multihash was not the supported 34-byte sha2-256 shape.
    #[error("unsupported multihash shape: expected 34 bytes, got {actual}")]
    UnsupportedShape { actual: usize },

    /// The multihash declares a hash function other than sha2-256.
    #[error("unsupported hash function: 0x{code:02x}")]
    UnsupportedFunction { code: u8 },

    /// The multihash declares a digest length other than 32.
    #[error("unsupported digest length: {length}")]
    UnsupportedDigestLength { length: u8 },

    /// A content identifier string was not valid base58.
    #[error("invalid base58 string: {0}")]
    InvalidBase58(String),
}
