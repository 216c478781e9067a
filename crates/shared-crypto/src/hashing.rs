//! # SHA-256 Hashing
//!
//! Block hashing and the proof-of-work difficulty predicate.
//!
//! Difficulty is measured in leading zero hex characters (nibbles) of the
//! hash. A 32-byte hash has 64 nibbles, so difficulties above 64 are
//! unsatisfiable.

use sha2::{Digest, Sha256};
use shared_types::Hash;

/// Stateful SHA-256 hasher.
pub struct Sha256Hasher {
    inner: Sha256,
}

impl Sha256Hasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(self) -> Hash {
        self.inner.finalize().into()
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash data with SHA-256 (one-shot).
pub fn sha256_hash(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Hash multiple inputs as one preimage.
pub fn sha256_hash_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Sha256Hasher::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize()
}

/// Count leading zero hex characters of a hash.
///
/// Stops at the first non-zero nibble; returns 64 for the all-zero hash.
pub fn leading_zero_nibbles(hash: &Hash) -> u32 {
    let mut count = 0;
    for byte in hash {
        if *byte == 0 {
            count += 2;
            continue;
        }
        if byte >> 4 == 0 {
            count += 1;
        }
        break;
    }
    count
}
