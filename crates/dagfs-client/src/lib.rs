//! Block transport implementations for dagfs.
//!
//! Two implementations of the [`dagfs_dag::BlockFetcher`] /
//! [`dagfs_dag::BlockUploader`] traits:
//!
//! - [`GatewayClient`] — talks to an IPFS-style HTTP gateway
//!   (`/api/v0/block/get`, `/api/v0/block/put`)
//! - [`MemoryBlockStore`] — sha2-256-addressed in-memory map for tests
//!   and embedding

pub mod gateway;
pub mod memory;

pub use gateway::{GatewayClient, GatewayConfig};
pub use memory::MemoryBlockStore;
