use sha2::{Digest as _, Sha256};
use sha3::Keccak256;

/// Compute the sha2-256 digest of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Compute the Keccak-256 digest of `data`.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    use sha3::Digest as _;
    Keccak256::digest(data).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_empty_input() {
        // Well-known sha2-256 of the empty string.
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha256_known_vector() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn keccak256_empty_input() {
        // Keccak-256 (pre-NIST padding), as used by Ethereum.
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn digests_are_deterministic() {
        assert_eq!(sha256(b"block"), sha256(b"block"));
        assert_eq!(keccak256(b"block"), keccak256(b"block"));
        assert_ne!(sha256(b"block")[..], keccak256(b"block")[..]);
    }
}
