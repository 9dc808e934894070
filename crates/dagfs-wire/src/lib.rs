//! Varint and tagged-field wire codec for dagfs.
//!
//! This is a deliberately restricted protobuf-style codec: it supports
//! exactly two wire types (varint and length-delimited) and decodes only
//! against fixed, positional schemas known at compile time. There is no
//! unknown-field tolerance and no self-describing message support — a tag
//! outside the schema is a hard parse failure.
//!
//! # Key Types
//!
//! - [`MessageSchema`] — static ordered field table; position i is field
//!   number i+1
//! - [`WireRecord`] — decoded field name → value(s) mapping
//! - [`WireWriter`] — schema-aware encoder for the fields a caller emits

pub mod decode;
pub mod encode;
pub mod error;
pub mod schema;
pub mod varint;

pub use decode::{decode_message, WireRecord};
pub use encode::WireWriter;
pub use error::{WireError, WireResult};
pub use schema::{FieldSpec, FieldValue, MessageSchema, WireType};
pub use varint::{decode_varint, encode_varint, varint};
