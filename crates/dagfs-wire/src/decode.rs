//! Tagged-field message decoding.

use crate::error::{WireError, WireResult};
use crate::schema::{FieldValue, MessageSchema, WireType};
use crate::varint::decode_varint;

/// The decoded result of parsing a buffer against a schema.
///
/// Entries appear in order of first occurrence on the wire, not schema
/// order. A non-repeated field holds exactly the first decoded value; a
/// repeated field holds every occurrence in wire order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WireRecord {
    entries: Vec<RecordEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct RecordEntry {
    name: &'static str,
    values: Vec<FieldValue>,
}

impl WireRecord {
    /// The single value of a field, or its first occurrence if repeated.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .and_then(|e| e.values.first())
    }

    /// All occurrences of a field, in wire order.
    pub fn get_all(&self, name: &str) -> Option<&[FieldValue]> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.values.as_slice())
    }

    /// Returns `true` if the field occurred at least once.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Field names in order of first occurrence.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    fn push(&mut self, name: &'static str, value: FieldValue) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.values.push(value),
            None => self.entries.push(RecordEntry {
                name,
                values: vec![value],
            }),
        }
    }

    fn collapse(&mut self, schema: &MessageSchema) -> WireResult<()> {
        for entry in &mut self.entries {
            let (_, spec) = schema.number_of(entry.name)?;
            if !spec.repeated {
                entry.values.truncate(1);
            }
        }
        Ok(())
    }
}

/// Decode a complete buffer against a schema.
///
/// The cursor walks tag words from offset 0 to the end of the buffer. Each
/// tag word is `(field_number << 3) | wire_type`; the field number must
/// exist in the schema ([`WireError::UnknownField`] otherwise) and the wire
/// type must be varint or length-delimited
/// ([`WireError::UnsupportedWireType`] otherwise). Length-delimited fields
/// are bounds-checked before slicing ([`WireError::BufferOverrun`]).
pub fn decode_message(buf: &[u8], schema: &MessageSchema) -> WireResult<WireRecord> {
    let mut record = WireRecord::default();
    let mut cursor = 0usize;

    while cursor < buf.len() {
        let (tag_word, consumed) = decode_varint(buf, cursor)?;
        cursor += consumed;

        let number = tag_word >> 3;
        let spec = schema.field(number)?;
        let wire_type = WireType::from_tag((tag_word & 7) as u8, number)?;

        match wire_type {
            WireType::Varint => {
                let (value, consumed) = decode_varint(buf, cursor)?;
                cursor += consumed;
                record.push(spec.name, FieldValue::Uint(value));
            }
            WireType::LengthDelimited => {
                let (length, consumed) = decode_varint(buf, cursor)?;
                cursor += consumed;
                let length = usize::try_from(length).map_err(|_| WireError::BufferOverrun {
                    offset: cursor,
                    len: buf.len(),
                })?;
                let end = cursor
                    .checked_add(length)
                    .filter(|&end| end <= buf.len())
                    .ok_or(WireError::BufferOverrun {
                        offset: cursor,
                        len: buf.len(),
                    })?;
                record.push(spec.name, FieldValue::Bytes(buf[cursor..end].to_vec()));
                cursor = end;
            }
        }
    }

    record.collapse(schema)?;
    Ok(record)
}
