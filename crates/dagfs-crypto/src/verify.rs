use dagfs_types::Multihash;

use crate::error::{VerifyError, VerifyResult};
use crate::hasher::sha256;

/// Verify that `data` hashes to the digest embedded in `expected`.
///
/// Digests compare as raw byte arrays; the hex strings in the error exist
/// only for diagnostics. Callers must run this before decoding a fetched
/// block — decoding unverified bytes is a logic error.
pub fn verify_block(data: &[u8], expected: &Multihash) -> VerifyResult<()> {
    let actual = sha256(data);
    if &actual != expected.digest() {
        return Err(VerifyError::HashMismatch {
            expected: hex::encode(expected.digest()),
            actual: hex::encode(actual),
        });
    }
    Ok(())
}
