//! Foundation types for dagfs.
//!
//! This crate provides the multihash value type used to address immutable
//! blocks throughout the system. Every other dagfs crate depends on
//! `dagfs-types`.
//!
//! # Key Types
//!
//! - [`Multihash`] — 34-byte self-describing sha2-256 hash; its base58
//!   string form is the content identifier used to address a block

pub mod error;
pub mod multihash;

pub use error::TypeError;
pub use multihash::{Multihash, MULTIHASH_LEN, SHA2_256_CODE, SHA2_256_LEN};
