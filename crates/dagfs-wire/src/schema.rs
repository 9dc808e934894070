//! Fixed positional message schemas.
//!
//! Field names are not carried on the wire; a schema is an ordered table
//! where position i corresponds to protobuf field number i+1. The three
//! schemas this system decodes (node, link, UnixFS payload) are declared as
//! static tables in `dagfs-dag`.

use crate::error::{WireError, WireResult};

/// The two wire types this codec supports.
///
/// Wire type 1 (fixed64) and everything else is rejected with
/// [`WireError::UnsupportedWireType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WireType {
    /// Wire type 0: base-128 varint.
    Varint,
    /// Wire type 2: varint length followed by that many raw bytes.
    LengthDelimited,
}

impl WireType {
    /// Parse the low three bits of a tag word.
    pub fn from_tag(wire_type: u8, field: u64) -> WireResult<Self> {
        match wire_type {
            0 => Ok(Self::Varint),
            2 => Ok(Self::LengthDelimited),
            other => Err(WireError::UnsupportedWireType {
                wire_type: other,
                field,
            }),
        }
    }

    /// The three-bit wire type value for a tag word.
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Varint => 0,
            Self::LengthDelimited => 2,
        }
    }
}

/// One field in a positional schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, used as the key in decoded records.
    pub name: &'static str,
    /// The wire type this field is declared with.
    pub wire_type: WireType,
    /// Whether multiple occurrences are kept as an ordered list.
    pub repeated: bool,
}

impl FieldSpec {
    /// A singular field.
    pub const fn new(name: &'static str, wire_type: WireType) -> Self {
        Self {
            name,
            wire_type,
            repeated: false,
        }
    }

    /// A repeated field.
    pub const fn repeated(name: &'static str, wire_type: WireType) -> Self {
        Self {
            name,
            wire_type,
            repeated: true,
        }
    }
}

/// An ordered, closed field table for one message kind.
#[derive(Clone, Copy, Debug)]
pub struct MessageSchema {
    fields: &'static [FieldSpec],
}

impl MessageSchema {
    /// Build a schema from a static field table.
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    /// Number of fields in the schema.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by its 1-indexed field number.
    pub fn field(&self, number: u64) -> WireResult<&FieldSpec> {
        number
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| self.fields.get(i))
            .ok_or(WireError::UnknownField {
                number,
                schema_len: self.fields.len(),
            })
    }

    /// Look up a field's 1-indexed number by name.
    pub fn number_of(&self, name: &str) -> WireResult<(u64, &FieldSpec)> {
        self.fields
            .iter()
            .position(|f| f.name == name)
            .map(|i| (i as u64 + 1, &self.fields[i]))
            .ok_or_else(|| WireError::UnknownFieldName {
                name: name.to_string(),
            })
    }
}

/// A decoded field value with an explicit shape tag.
///
/// The decoder guarantees the shape: varint fields always decode to
/// [`FieldValue::Uint`], length-delimited fields to [`FieldValue::Bytes`].
/// Callers dispatch on the variant instead of re-checking raw buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// A decoded varint.
    Uint(u64),
    /// A length-delimited byte sequence.
    Bytes(Vec<u8>),
}

impl FieldValue {
    /// The integer value, if this is a varint field.
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Self::Uint(n) => Some(*n),
            Self::Bytes(_) => None,
        }
    }

    /// The byte sequence, if this is a length-delimited field.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Uint(_) => None,
            Self::Bytes(b) => Some(b),
        }
    }
}
