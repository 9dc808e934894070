use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Multihash function code for sha2-256.
pub const SHA2_256_CODE: u8 = 0x12;
/// Digest length for sha2-256.
pub const SHA2_256_LEN: u8 = 32;
/// Total length of a supported multihash: 2-byte prefix + 32-byte digest.
pub const MULTIHASH_LEN: usize = 34;

/// A self-describing sha2-256 hash addressing an immutable block.
///
/// The wire form is exactly 34 bytes: a function-code byte (`0x12`), a
/// digest-length byte (`0x20`), then the 32-byte digest. The base58
/// rendering of those 34 bytes is the content identifier used to request
/// a block from a gateway (e.g. `QmY7Yh4UquoXHLPFo2XbhXkhBvFoPwmQUSa92pxnxjQuPU`).
///
/// Only sha2-256 is supported; any other function code or digest length is
/// rejected at construction time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Multihash([u8; MULTIHASH_LEN]);

impl Multihash {
    /// Wrap a pre-computed sha2-256 digest in multihash framing.
    pub fn wrap_sha256(digest: [u8; 32]) -> Self {
        let mut bytes = [0u8; MULTIHASH_LEN];
        bytes[0] = SHA2_256_CODE;
        bytes[1] = SHA2_256_LEN;
        bytes[2..].copy_from_slice(&digest);
        Self(bytes)
    }

    /// Parse a multihash from its raw wire bytes.
    ///
    /// Fails unless the input is exactly 34 bytes declaring a 32-byte
    /// sha2-256 digest.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TypeError> {
        if data.len() != MULTIHASH_LEN {
            return Err(TypeError::UnsupportedShape { actual: data.len() });
        }
        if data[0] != SHA2_256_CODE {
            return Err(TypeError::UnsupportedFunction { code: data[0] });
        }
        if data[1] != SHA2_256_LEN {
            return Err(TypeError::UnsupportedDigestLength { length: data[1] });
        }
        let mut bytes = [0u8; MULTIHASH_LEN];
        bytes.copy_from_slice(data);
        Ok(Self(bytes))
    }

    /// Parse a multihash from its base58 content-identifier string.
    pub fn from_base58(s: &str) -> Result<Self, TypeError> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| TypeError::InvalidBase58(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// The base58 content-identifier string for this multihash.
    pub fn to_base58(&self) -> String {
        bs58::encode(&self.0).into_string()
    }

    /// The hash function code byte (always `0x12`).
    pub fn fn_code(&self) -> u8 {
        self.0[0]
    }

    /// The 32-byte digest, without multihash framing.
    pub fn digest(&self) -> &[u8; 32] {
        self.0[2..].try_into().expect("digest is 32 bytes")
    }

    /// The full 34-byte wire form.
    pub fn as_bytes(&self) -> &[u8; MULTIHASH_LEN] {
        &self.0
    }

    /// Short hex form of the digest (first 8 characters), for logs.
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[2..6])
    }
}

impl fmt::Debug for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multihash({})", self.short_hex())
    }
}

impl fmt::Display for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl Serialize for Multihash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for Multihash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_base58(&s).map_err(D::Error::custom)
    }
}
