//! The container node: links or inline data, never both.

use dagfs_wire::{
    decode_message, FieldSpec, FieldValue, MessageSchema, WireType, WireWriter,
};

use crate::error::{DagError, DagResult};
use crate::link::{decode_link, DagLink};
use crate::unixfs::UnixFsPayload;

/// Field layout of a container node: 1 = data, 2 = links (repeated).
pub const NODE_SCHEMA: MessageSchema = MessageSchema::new(&[
    FieldSpec::new("data", WireType::LengthDelimited),
    FieldSpec::repeated("links", WireType::LengthDelimited),
]);

/// A decoded DAG node.
///
/// Exactly one of the two cases is populated; a buffer carrying neither
/// field fails decode with [`DagError::MalformedNode`]. When both appear on
/// the wire, links win — a node with children is resolved through them, and
/// its own data field (real DAG-PB stores chunk metadata there) is not file
/// content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DagNode {
    /// An interior node: ordered links to child blocks.
    Links(Vec<DagLink>),
    /// A leaf node: inline UnixFS payload bytes, not yet decoded.
    Data(Vec<u8>),
}

impl DagNode {
    /// Decode a block's bytes as a container node.
    pub fn decode(buf: &[u8]) -> DagResult<Self> {
        let record = decode_message(buf, &NODE_SCHEMA)?;

        if let Some(raw_links) = record.get_all("links") {
            if !raw_links.is_empty() {
                let links = raw_links
                    .iter()
                    .map(|value| {
                        let bytes = value
                            .as_bytes()
                            .ok_or(DagError::MalformedLink { field: "record" })?;
                        decode_link(bytes)
                    })
                    .collect::<DagResult<Vec<DagLink>>>()?;
                return Ok(Self::Links(links));
            }
        }

        if let Some(data) = record.get("data").and_then(FieldValue::as_bytes) {
            return Ok(Self::Data(data.to_vec()));
        }

        Err(DagError::MalformedNode)
    }

    /// Encode a leaf node wrapping `payload` as UnixFS file data.
    pub fn encode_data_node(payload: &[u8]) -> DagResult<Vec<u8>> {
        let unixfs = UnixFsPayload::encode(payload)?;
        let mut writer = WireWriter::new(&NODE_SCHEMA);
        writer.put_bytes("data", &unixfs)?;
        Ok(writer.finish())
    }

    /// Encode a node with no payload at all (zero bytes on the wire).
    pub fn encode_empty_node() -> Vec<u8> {
        Vec::new()
    }

    /// Encode an interior node from pre-encoded link records.
    pub fn encode_links_node(links: &[DagLink]) -> DagResult<Vec<u8>> {
        let mut writer = WireWriter::new(&NODE_SCHEMA);
        for link in links {
            writer.put_bytes("links", &crate::link::encode_link(link)?)?;
        }
        Ok(writer.finish())
    }
}
