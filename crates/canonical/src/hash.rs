//! Versioned content hashing for canonical text.

use sha2::{Digest, Sha256};

/// Hash canonical bytes together with the normalization version.
///
/// Layout: `SHA-256(version_be || 0x00 || bytes)`, hex-encoded. Including the
/// version guarantees that texts normalized under different behavior never
/// collide on identity, even when the canonical strings happen to agree.
pub fn hash_canonical_bytes(version: u32, bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(version.to_be_bytes());
    hasher.update([0x00]);
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
