//! Base-128 variable-length unsigned integers.
//!
//! Standard continuation-bit encoding: each byte carries 7 payload bits,
//! least-significant group first; a set high bit means more bytes follow.
//! Values up to the full `u64` range are supported (the file sizes in a DAG
//! routinely exceed 32 bits).

use crate::error::{WireError, WireResult};

/// Append the varint encoding of `n` to `out`.
pub fn encode_varint(mut n: u64, out: &mut Vec<u8>) {
    loop {
        let byte = (n & 0x7f) as u8;
        n >>= 7;
        if n == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// The varint encoding of `n` as a fresh buffer.
pub fn varint(n: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(10);
    encode_varint(n, &mut out);
    out
}

/// Decode a varint starting at `offset`. Returns (value, bytes consumed).
///
/// Fails with [`WireError::BufferOverrun`] if `offset` is out of range or a
/// continuation bit is set on the final available byte — truncated input is
/// never silently accepted as a smaller value.
pub fn decode_varint(buf: &[u8], offset: usize) -> WireResult<(u64, usize)> {
    let mut value: u64 = 0;
    let mut shift = 0u32;
    let mut pos = offset;
    loop {
        let byte = *buf.get(pos).ok_or(WireError::BufferOverrun {
            offset: pos,
            len: buf.len(),
        })?;
        if shift > 63 {
            return Err(WireError::VarintOverflow { offset: pos });
        }
        value |= u64::from(byte & 0x7f) << shift;
        pos += 1;
        if byte & 0x80 == 0 {
            return Ok((value, pos - offset));
        }
        shift += 7;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_byte_values() {
        assert_eq!(varint(0), vec![0x00]);
        assert_eq!(varint(1), vec![0x01]);
        assert_eq!(varint(127), vec![0x7f]);
    }

    #[test]
    fn multi_byte_values() {
        assert_eq!(varint(128), vec![0x80, 0x01]);
        assert_eq!(varint(300), vec![0xac, 0x02]);
    }

    #[test]
    fn value_above_32_bits() {
        let n = 4_294_967_296u64; // 2^32
        let encoded = varint(n);
        let (decoded, consumed) = decode_varint(&encoded, 0).unwrap();
        assert_eq!(decoded, n);
        assert_eq!(consumed, encoded.len());
    }

    #[test]
    fn decode_at_offset() {
        let mut buf = vec![0xff, 0xff]; // junk prefix
        encode_varint(300, &mut buf);
        let (value, consumed) = decode_varint(&buf, 2).unwrap();
        assert_eq!(value, 300);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn decode_truncated_fails() {
        // Continuation bit set, then nothing.
        let err = decode_varint(&[0x80], 0).unwrap_err();
        assert_eq!(err, WireError::BufferOverrun { offset: 1, len: 1 });
    }

    #[test]
    fn decode_empty_fails() {
        let err = decode_varint(&[], 0).unwrap_err();
        assert_eq!(err, WireError::BufferOverrun { offset: 0, len: 0 });
    }

    #[test]
    fn decode_overlong_varint_fails() {
        // Eleven continuation bytes exceed the 64-bit value range.
        let buf = [0x80u8; 10]
            .iter()
            .chain([0x01].iter())
            .copied()
            .collect::<Vec<_>>();
        let err = decode_varint(&buf, 0).unwrap_err();
        assert_eq!(err, WireError::VarintOverflow { offset: 10 });
    }

    #[test]
    fn decode_offset_past_end_fails() {
        let err = decode_varint(&[0x01], 5).unwrap_err();
        assert_eq!(err, WireError::BufferOverrun { offset: 5, len: 1 });
    }

    proptest! {
        #[test]
        fn roundtrip_any_u64(n in any::<u64>()) {
            let encoded = varint(n);
            let (decoded, consumed) = decode_varint(&encoded, 0).unwrap();
            prop_assert_eq!(decoded, n);
            prop_assert_eq!(consumed, encoded.len());
        }

        #[test]
        fn encoding_is_minimal(n in any::<u64>()) {
            // No trailing continuation byte: the last byte has the high
            // bit clear, all earlier bytes have it set.
            let encoded = varint(n);
            let (last, rest) = encoded.split_last().unwrap();
            prop_assert_eq!(last & 0x80, 0);
            for byte in rest {
                prop_assert_eq!(byte & 0x80, 0x80);
            }
        }
    }
}
