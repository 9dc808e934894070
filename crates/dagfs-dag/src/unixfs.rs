//! UnixFS payload codec.
//!
//! The inline data of a DAG node is itself a tagged message: a type
//! discriminant plus optional file data and size metadata. Only the `File`
//! type is resolvable; everything else (directories, symlinks, HAMT shards)
//! is rejected rather than returning empty or garbage bytes.

use std::fmt;

use dagfs_wire::{
    decode_message, FieldSpec, FieldValue, MessageSchema, WireType, WireWriter,
};

use crate::error::{DagError, DagResult};

/// Field layout of a UnixFS payload message.
///
/// 1 = type, 2 = data, 3 = filesize, 4 = blocksize (repeated),
/// 5 = hash_type, 6 = fanout.
pub const UNIXFS_SCHEMA: MessageSchema = MessageSchema::new(&[
    FieldSpec::new("type", WireType::Varint),
    FieldSpec::new("data", WireType::LengthDelimited),
    FieldSpec::new("filesize", WireType::Varint),
    FieldSpec::repeated("blocksize", WireType::Varint),
    FieldSpec::new("hash_type", WireType::Varint),
    FieldSpec::new("fanout", WireType::Varint),
]);

/// UnixFS type discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnixFsType {
    Raw,
    Directory,
    File,
    Metadata,
    Symlink,
    HamtShard,
}

impl UnixFsType {
    /// Parse a wire discriminant. Unknown values are a decode failure,
    /// consistent with the closed-schema stance of the wire layer.
    pub fn from_code(value: u64) -> Option<Self> {
        match value {
            0 => Some(Self::Raw),
            1 => Some(Self::Directory),
            2 => Some(Self::File),
            3 => Some(Self::Metadata),
            4 => Some(Self::Symlink),
            5 => Some(Self::HamtShard),
            _ => None,
        }
    }

    /// The wire discriminant for this type.
    pub fn code(self) -> u64 {
        match self {
            Self::Raw => 0,
            Self::Directory => 1,
            Self::File => 2,
            Self::Metadata => 3,
            Self::Symlink => 4,
            Self::HamtShard => 5,
        }
    }
}

impl fmt::Display for UnixFsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Raw => "Raw",
            Self::Directory => "Directory",
            Self::File => "File",
            Self::Metadata => "Metadata",
            Self::Symlink => "Symlink",
            Self::HamtShard => "HAMTShard",
        };
        write!(f, "{name}")
    }
}

/// A decoded UnixFS file payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnixFsPayload {
    /// File content bytes; empty when the `data` field was absent.
    pub data: Vec<u8>,
    /// Declared total file size, if present.
    pub filesize: Option<u64>,
    /// Declared per-chunk sizes, in wire order.
    pub blocksizes: Vec<u64>,
    /// Hash function hint for HAMT layouts, if present.
    pub hash_type: Option<u64>,
    /// Fanout hint for HAMT layouts, if present.
    pub fanout: Option<u64>,
}

impl UnixFsPayload {
    /// Decode a payload message, accepting only the `File` type.
    ///
    /// An absent `data` field is valid and yields empty bytes. A missing or
    /// malformed `type` field fails with [`DagError::MalformedPayload`];
    /// any type other than `File` fails with
    /// [`DagError::UnsupportedPayloadType`].
    pub fn decode(buf: &[u8]) -> DagResult<Self> {
        let record = decode_message(buf, &UNIXFS_SCHEMA)?;

        let type_code = record
            .get("type")
            .and_then(FieldValue::as_uint)
            .ok_or(DagError::MalformedPayload { field: "type" })?;
        let type_ = UnixFsType::from_code(type_code)
            .ok_or(DagError::UnknownPayloadType { value: type_code })?;
        if type_ != UnixFsType::File {
            return Err(DagError::UnsupportedPayloadType(type_));
        }

        let data = match record.get("data") {
            None => Vec::new(),
            Some(value) => value
                .as_bytes()
                .ok_or(DagError::MalformedPayload { field: "data" })?
                .to_vec(),
        };

        let blocksizes = record
            .get_all("blocksize")
            .unwrap_or_default()
            .iter()
            .map(|v| v.as_uint().ok_or(DagError::MalformedPayload { field: "blocksize" }))
            .collect::<DagResult<Vec<u64>>>()?;

        Ok(Self {
            data,
            filesize: record.get("filesize").and_then(FieldValue::as_uint),
            blocksizes,
            hash_type: record.get("hash_type").and_then(FieldValue::as_uint),
            fanout: record.get("fanout").and_then(FieldValue::as_uint),
        })
    }

    /// Encode `data` as a `File` payload with its byte length as filesize.
    ///
    /// Blocksize, hash_type, and fanout are never written.
    pub fn encode(data: &[u8]) -> DagResult<Vec<u8>> {
        let mut writer = WireWriter::new(&UNIXFS_SCHEMA);
        writer.put_uint("type", UnixFsType::File.code())?;
        writer.put_bytes("data", data)?;
        writer.put_uint("filesize", data.len() as u64)?;
        Ok(writer.finish())
    }
}
