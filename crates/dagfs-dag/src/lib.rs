//! Merkle-DAG node model and recursive content resolver.
//!
//! A block decodes as a [`DagNode`]: either an ordered list of links to
//! other blocks or an inline UnixFS file payload. The [`DagResolver`] walks
//! that structure — fetch, verify, decode, recurse — and concatenates leaf
//! payloads in link order to reconstruct the original file contents.
//!
//! All I/O goes through the [`BlockFetcher`] / [`BlockUploader`] traits;
//! this crate never talks to a network itself.

pub mod error;
pub mod link;
pub mod node;
pub mod resolver;
pub mod unixfs;

pub use error::{DagError, DagResult};
pub use link::{decode_link, encode_link, DagLink, LINK_SCHEMA};
pub use node::{DagNode, NODE_SCHEMA};
pub use resolver::{BlockFetcher, BlockUploader, DagResolver};
pub use unixfs::{UnixFsPayload, UnixFsType, UNIXFS_SCHEMA};
