//! Digest primitives and block integrity verification.
//!
//! Every block is addressed by the sha2-256 digest embedded in its
//! multihash; [`verify_block`] recomputes that digest and rejects any block
//! whose bytes do not match before they are ever decoded. Keccak-256 is
//! provided for callers that fingerprint resolved content.

pub mod error;
pub mod hasher;
pub mod verify;

pub use error::{VerifyError, VerifyResult};
pub use hasher::{keccak256, sha256};
pub use verify::verify_block;
