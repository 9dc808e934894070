//! Error types for DAG decoding and resolution.

use dagfs_crypto::VerifyError;
use dagfs_types::TypeError;
use dagfs_wire::WireError;
use thiserror::Error;

/// Errors that can occur while decoding or resolving DAG content.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DagError {
    /// Wire-level parse failure (overrun, unknown field, bad wire type).
    #[error(transparent)]
    Wire(#[from] WireError),

    /// Multihash shape or encoding failure.
    #[error(transparent)]
    Type(#[from] TypeError),

    /// Block bytes did not match the digest they are addressed by.
    #[error(transparent)]
    Verify(#[from] VerifyError),

    /// A link's hash field was not the 34-byte multihash shape.
    #[error("unsupported link hash shape: expected 34 bytes, got {actual}")]
    UnsupportedHashShape { actual: usize },

    /// A link record was missing a required field.
    #[error("malformed link: missing {field}")]
    MalformedLink { field: &'static str },

    /// A UnixFS payload carried a type this resolver does not handle.
    #[error("unsupported payload type: {0}")]
    UnsupportedPayloadType(crate::unixfs::UnixFsType),

    /// A UnixFS type discriminant outside the known enum.
    #[error("unknown payload type discriminant: {value}")]
    UnknownPayloadType { value: u64 },

    /// A UnixFS payload field decoded to the wrong shape or was missing.
    #[error("malformed payload: {field}")]
    MalformedPayload { field: &'static str },

    /// A node carried neither links nor inline data.
    #[error("malformed node: missing links or data")]
    MalformedNode,

    /// The fetch or upload collaborator failed.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Convenience alias for DAG results.
pub type DagResult<T> = Result<T, DagError>;
