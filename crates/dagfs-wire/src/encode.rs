//! Tagged-field message encoding.

use crate::error::WireResult;
use crate::schema::{MessageSchema, WireType};
use crate::varint::encode_varint;

/// Schema-aware encoder for the fields a caller chooses to emit.
///
/// Fields are written in call order; the schema only supplies field numbers
/// and wire types. The writer does not enforce presence or ordering — the
/// message kinds this system encodes are small enough that callers own that.
#[derive(Debug)]
pub struct WireWriter<'a> {
    schema: &'a MessageSchema,
    buf: Vec<u8>,
}

impl<'a> WireWriter<'a> {
    /// Start an empty message for `schema`.
    pub fn new(schema: &'a MessageSchema) -> Self {
        Self {
            schema,
            buf: Vec::new(),
        }
    }

    /// Append a varint field by name.
    pub fn put_uint(&mut self, name: &str, value: u64) -> WireResult<&mut Self> {
        let number = self.tag(name)?;
        encode_varint((number << 3) | u64::from(WireType::Varint.as_u8()), &mut self.buf);
        encode_varint(value, &mut self.buf);
        Ok(self)
    }

    /// Append a length-delimited field by name.
    pub fn put_bytes(&mut self, name: &str, value: &[u8]) -> WireResult<&mut Self> {
        let number = self.tag(name)?;
        encode_varint(
            (number << 3) | u64::from(WireType::LengthDelimited.as_u8()),
            &mut self.buf,
        );
        encode_varint(value.len() as u64, &mut self.buf);
        self.buf.extend_from_slice(value);
        Ok(self)
    }

    /// The encoded message bytes.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    fn tag(&self, name: &str) -> WireResult<u64> {
        let (number, _) = self.schema.number_of(name)?;
        Ok(number)
    }
}
