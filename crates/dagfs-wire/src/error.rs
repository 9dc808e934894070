//! Error types for the wire codec.

use thiserror::Error;

/// Errors that can occur while decoding or encoding wire data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    /// Decoding would read past the end of the buffer.
    #[error("buffer overrun at offset {offset} (buffer is {len} bytes)")]
    BufferOverrun { offset: usize, len: usize },

    /// A varint kept its continuation bit set past the 64-bit value range.
    #[error("varint overflows 64 bits at offset {offset}")]
    VarintOverflow { offset: usize },

    /// A tag word referenced a field number outside the schema.
    #[error("unknown field number {number} for schema of {schema_len} fields")]
    UnknownField { number: u64, schema_len: usize },

    /// An encoder was asked to write a field name the schema does not define.
    #[error("unknown field name: {name}")]
    UnknownFieldName { name: String },

    /// An observed wire type is not one of the two supported types.
    /// Wire type 1 (fixed64) is an explicit, documented limitation.
    #[error("unsupported wire type {wire_type} on field {field}")]
    UnsupportedWireType { wire_type: u8, field: u64 },
}

/// Convenience alias for wire codec results.
pub type WireResult<T> = Result<T, WireError>;
