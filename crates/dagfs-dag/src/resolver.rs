//! Recursive DAG resolution over a block transport.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::{try_join_all, BoxFuture};
use tracing::{debug, trace};

use dagfs_crypto::verify_block;
use dagfs_types::Multihash;

use crate::error::DagResult;
use crate::node::DagNode;
use crate::unixfs::UnixFsPayload;

/// Fetches raw block bytes by content identifier.
///
/// Implementations must return the block's bytes unmodified; the resolver
/// verifies the content hash itself and rejects anything that does not
/// match. Transport failures map to [`crate::DagError::Transport`].
#[async_trait]
pub trait BlockFetcher: Send + Sync {
    async fn fetch_block(&self, id: &Multihash) -> DagResult<Vec<u8>>;
}

/// Stores a pre-encoded block and returns its assigned identifier.
#[async_trait]
pub trait BlockUploader: Send + Sync {
    async fn upload_block(&self, encoded: &[u8]) -> DagResult<Multihash>;
}

/// Resolves file content out of a merkle DAG.
///
/// Each call is self-contained: no cache, no retry, no state shared across
/// calls. A failure anywhere in the link tree aborts the whole resolve —
/// there is no partial-success mode.
pub struct DagResolver<S> {
    service: Arc<S>,
}

impl<S> DagResolver<S> {
    /// Create a resolver over a block transport.
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }
}

impl<S: BlockFetcher> DagResolver<S> {
    /// Resolve a content identifier string to the file bytes it addresses.
    pub async fn resolve_str(&self, id: &str) -> DagResult<Vec<u8>> {
        let id = Multihash::from_base58(id)?;
        self.resolve(&id).await
    }

    /// Resolve a multihash to the file bytes it addresses.
    ///
    /// Fetches the block, verifies its digest, decodes it as a [`DagNode`],
    /// and either recurses over its links or decodes its inline payload.
    /// Sibling links resolve concurrently; the result is always
    /// concatenated in link-list order, never completion order.
    pub async fn resolve(&self, id: &Multihash) -> DagResult<Vec<u8>> {
        self.resolve_block(*id).await
    }

    fn resolve_block(&self, id: Multihash) -> BoxFuture<'_, DagResult<Vec<u8>>> {
        Box::pin(async move {
            trace!(id = %id, "fetching block");
            let raw = self.service.fetch_block(&id).await?;
            // Integrity gate: nothing decodes until the bytes check out.
            verify_block(&raw, &id)?;

            match DagNode::decode(&raw)? {
                DagNode::Links(links) => {
                    debug!(id = %id, links = links.len(), "resolving interior node");
                    let parts = try_join_all(
                        links.iter().map(|link| self.resolve_block(link.hash)),
                    )
                    .await?;
                    Ok(parts.concat())
                }
                DagNode::Data(data) => {
                    debug!(id = %id, bytes = data.len(), "resolving leaf node");
                    Ok(UnixFsPayload::decode(&data)?.data)
                }
            }
        })
    }
}

impl<S: BlockUploader> DagResolver<S> {
    /// Encode `data` as a single leaf node and store it.
    ///
    /// Returns the identifier assigned by the store.
    pub async fn store(&self, data: &[u8]) -> DagResult<Multihash> {
        let encoded = DagNode::encode_data_node(data)?;
        let id = self.service.upload_block(&encoded).await?;
        debug!(id = %id, bytes = data.len(), "stored data node");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use dagfs_crypto::sha256;

    use crate::error::DagError;
    use crate::link::DagLink;

    /// Test fetcher over a fixed block map, with optional per-block delay
    /// to force out-of-order completion.
    #[derive(Default)]
    struct MapFetcher {
        blocks: HashMap<Multihash, Vec<u8>>,
        delays: HashMap<Multihash, u64>,
        fetch_log: Mutex<Vec<Multihash>>,
    }

    impl MapFetcher {
        fn insert(&mut self, block: Vec<u8>) -> Multihash {
            let id = Multihash::wrap_sha256(sha256(&block));
            self.blocks.insert(id, block);
            id
        }

        /// Insert a block under a deliberately wrong identifier.
        fn insert_corrupt(&mut self, block: Vec<u8>) -> Multihash {
            let id = Multihash::wrap_sha256(sha256(b"somebody else's bytes"));
            self.blocks.insert(id, block);
            id
        }
    }

    #[async_trait]
    impl BlockFetcher for MapFetcher {
        async fn fetch_block(&self, id: &Multihash) -> DagResult<Vec<u8>> {
            if let Some(ms) = self.delays.get(id) {
                tokio::time::sleep(Duration::from_millis(*ms)).await;
            }
            self.fetch_log.lock().unwrap().push(*id);
            self.blocks
                .get(id)
                .cloned()
                .ok_or_else(|| DagError::Transport(format!("block not found: {id}")))
        }
    }

    fn leaf(fetcher: &mut MapFetcher, data: &[u8]) -> (Multihash, DagLink) {
        let block = DagNode::encode_data_node(data).unwrap();
        let tsize = block.len() as u64;
        let id = fetcher.insert(block);
        (
            id,
            DagLink {
                hash: id,
                name: String::new(),
                tsize,
            },
        )
    }

    #[tokio::test]
    async fn resolves_single_data_node() {
        let mut fetcher = MapFetcher::default();
        let (id, _) = leaf(&mut fetcher, b"hello dag");
        let resolver = DagResolver::new(Arc::new(fetcher));
        let bytes = resolver.resolve(&id).await.unwrap();
        assert_eq!(bytes, b"hello dag");
    }

    #[tokio::test]
    async fn resolves_empty_data_node() {
        let mut fetcher = MapFetcher::default();
        let (id, _) = leaf(&mut fetcher, b"");
        let resolver = DagResolver::new(Arc::new(fetcher));
        assert!(resolver.resolve(&id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn concatenates_links_in_list_order() {
        let mut fetcher = MapFetcher::default();
        let (id1, l1) = leaf(&mut fetcher, b"first ");
        let (_, l2) = leaf(&mut fetcher, b"second ");
        let (_, l3) = leaf(&mut fetcher, b"third");
        // The first link completes last; order must still hold.
        fetcher.delays.insert(id1, 50);
        let root = DagNode::encode_links_node(&[l1, l2, l3]).unwrap();
        let root_id = fetcher.insert(root);

        let fetcher = Arc::new(fetcher);
        let resolver = DagResolver::new(Arc::clone(&fetcher));
        let bytes = resolver.resolve(&root_id).await.unwrap();
        assert_eq!(bytes, b"first second third");

        // The delayed block really did finish fetching last.
        let log = fetcher.fetch_log.lock().unwrap();
        assert_eq!(log.last(), Some(&id1));
    }

    #[tokio::test]
    async fn resolves_two_level_dag() {
        let mut fetcher = MapFetcher::default();
        let (_, l1) = leaf(&mut fetcher, b"aa");
        let (_, l2) = leaf(&mut fetcher, b"bb");
        let inner = DagNode::encode_links_node(&[l1, l2]).unwrap();
        let inner_id = fetcher.insert(inner.clone());
        let inner_link = DagLink {
            hash: inner_id,
            name: String::new(),
            tsize: inner.len() as u64,
        };
        let (_, l3) = leaf(&mut fetcher, b"cc");
        let root = DagNode::encode_links_node(&[inner_link, l3]).unwrap();
        let root_id = fetcher.insert(root);

        let resolver = DagResolver::new(Arc::new(fetcher));
        let bytes = resolver.resolve(&root_id).await.unwrap();
        assert_eq!(bytes, b"aabbcc");
    }

    #[tokio::test]
    async fn hash_mismatch_fails_before_decode() {
        let mut fetcher = MapFetcher::default();
        // Valid node bytes stored under the wrong identifier: the resolver
        // must reject on the digest, not decode the node.
        let block = DagNode::encode_data_node(b"legit looking").unwrap();
        let id = fetcher.insert_corrupt(block);
        let resolver = DagResolver::new(Arc::new(fetcher));
        let err = resolver.resolve(&id).await.unwrap_err();
        assert!(matches!(err, DagError::Verify(_)));
    }

    #[tokio::test]
    async fn failing_link_aborts_whole_resolve() {
        let mut fetcher = MapFetcher::default();
        let (_, good) = leaf(&mut fetcher, b"good");
        let missing = DagLink {
            hash: Multihash::wrap_sha256(sha256(b"never stored")),
            name: String::new(),
            tsize: 0,
        };
        let root = DagNode::encode_links_node(&[good, missing]).unwrap();
        let root_id = fetcher.insert(root);

        let resolver = DagResolver::new(Arc::new(fetcher));
        let err = resolver.resolve(&root_id).await.unwrap_err();
        assert!(matches!(err, DagError::Transport(_)));
    }

    #[tokio::test]
    async fn resolve_str_parses_identifier() {
        let mut fetcher = MapFetcher::default();
        let (id, _) = leaf(&mut fetcher, b"by string");
        let resolver = DagResolver::new(Arc::new(fetcher));
        let bytes = resolver.resolve_str(&id.to_base58()).await.unwrap();
        assert_eq!(bytes, b"by string");
    }

    #[tokio::test]
    async fn resolve_str_rejects_bad_identifier() {
        let resolver = DagResolver::new(Arc::new(MapFetcher::default()));
        let err = resolver.resolve_str("not-base58-0OIl").await.unwrap_err();
        assert!(matches!(err, DagError::Type(_)));
    }

    #[tokio::test]
    async fn non_file_leaf_payload_fails() {
        use dagfs_wire::WireWriter;
        let mut fetcher = MapFetcher::default();
        // A leaf whose UnixFS payload claims to be a directory.
        let mut payload = WireWriter::new(&crate::unixfs::UNIXFS_SCHEMA);
        payload.put_uint("type", 1).unwrap();
        let mut node = WireWriter::new(&crate::node::NODE_SCHEMA);
        node.put_bytes("data", &payload.finish()).unwrap();
        let id = fetcher.insert(node.finish());

        let resolver = DagResolver::new(Arc::new(fetcher));
        let err = resolver.resolve(&id).await.unwrap_err();
        assert!(matches!(err, DagError::UnsupportedPayloadType(_)));
    }
}
