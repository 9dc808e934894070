//! In-memory, sha2-256-addressed block store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use dagfs_crypto::sha256;
use dagfs_dag::{BlockFetcher, BlockUploader, DagError, DagResult};
use dagfs_types::Multihash;

/// In-memory, HashMap-based block store.
///
/// Intended for tests and embedding. Blocks are held behind a `RwLock` and
/// addressed by the sha2-256 multihash of their bytes, so anything written
/// here always passes the resolver's integrity check. Writes are idempotent
/// — identical bytes always map to the same identifier.
pub struct MemoryBlockStore {
    blocks: RwLock<HashMap<Multihash, Vec<u8>>>,
}

impl MemoryBlockStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            blocks: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a block synchronously and return its identifier.
    pub fn put_block(&self, block: Vec<u8>) -> Multihash {
        let id = Multihash::wrap_sha256(sha256(&block));
        let mut map = self.blocks.write().expect("lock poisoned");
        map.entry(id).or_insert(block);
        id
    }

    /// Returns `true` if the store holds a block for `id`.
    pub fn contains(&self, id: &Multihash) -> bool {
        self.blocks.read().expect("lock poisoned").contains_key(id)
    }

    /// Number of blocks currently stored.
    pub fn len(&self) -> usize {
        self.blocks.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.read().expect("lock poisoned").is_empty()
    }

    /// Remove all blocks.
    pub fn clear(&self) {
        self.blocks.write().expect("lock poisoned").clear();
    }
}

impl Default for MemoryBlockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlockFetcher for MemoryBlockStore {
    async fn fetch_block(&self, id: &Multihash) -> DagResult<Vec<u8>> {
        let map = self.blocks.read().expect("lock poisoned");
        map.get(id)
            .cloned()
            .ok_or_else(|| DagError::Transport(format!("block not found: {id}")))
    }
}

#[async_trait]
impl BlockUploader for MemoryBlockStore {
    async fn upload_block(&self, encoded: &[u8]) -> DagResult<Multihash> {
        Ok(self.put_block(encoded.to_vec()))
    }
}
