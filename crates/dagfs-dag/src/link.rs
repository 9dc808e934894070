//! DAG link records.

use dagfs_types::Multihash;
use dagfs_wire::{
    decode_message, FieldSpec, FieldValue, MessageSchema, WireType, WireWriter,
};

use crate::error::{DagError, DagResult};

/// Field layout of a link record: 1 = hash, 2 = name, 3 = tsize.
pub const LINK_SCHEMA: MessageSchema = MessageSchema::new(&[
    FieldSpec::new("hash", WireType::LengthDelimited),
    FieldSpec::new("name", WireType::LengthDelimited),
    FieldSpec::new("tsize", WireType::Varint),
]);

/// A reference from a DAG node to another block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DagLink {
    /// Multihash of the target block.
    pub hash: Multihash,
    /// Link name; empty for anonymous file-chunk links.
    pub name: String,
    /// Cumulative size of the target subtree in bytes.
    pub tsize: u64,
}

/// Decode one link record.
///
/// The hash field is required and must be exactly 34 bytes — any other
/// length fails with [`DagError::UnsupportedHashShape`] rather than being
/// truncated or padded, since only 34-byte sha2-256 multihashes are
/// addressable. Name and tsize default to empty / zero when absent.
pub fn decode_link(buf: &[u8]) -> DagResult<DagLink> {
    let record = decode_message(buf, &LINK_SCHEMA)?;

    let hash_bytes = record
        .get("hash")
        .and_then(FieldValue::as_bytes)
        .ok_or(DagError::MalformedLink { field: "hash" })?;
    if hash_bytes.len() != dagfs_types::MULTIHASH_LEN {
        return Err(DagError::UnsupportedHashShape {
            actual: hash_bytes.len(),
        });
    }
    let hash = Multihash::from_bytes(hash_bytes)?;

    let name = record
        .get("name")
        .and_then(FieldValue::as_bytes)
        .map(|b| String::from_utf8_lossy(b).into_owned())
        .unwrap_or_default();

    let tsize = record
        .get("tsize")
        .and_then(FieldValue::as_uint)
        .unwrap_or(0);

    Ok(DagLink { hash, name, tsize })
}

/// Encode one link record. Used to build link-bearing nodes.
pub fn encode_link(link: &DagLink) -> DagResult<Vec<u8>> {
    let mut writer = WireWriter::new(&LINK_SCHEMA);
    writer.put_bytes("hash", link.hash.as_bytes())?;
    writer.put_bytes("name", link.name.as_bytes())?;
    writer.put_uint("tsize", link.tsize)?;
    Ok(writer.finish())
}
