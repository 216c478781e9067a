//! # Core Domain Entities
//!
//! Primitive aliases and the opaque transaction record.
//!
//! All address fields across the workspace use `[u8; 20]`; hashes are
//! 32-byte SHA-256 outputs.

use serde::{Deserialize, Serialize};

/// A 32-byte hash (SHA-256).
pub type Hash = [u8; 32];

/// A 32-byte Ed25519 public key.
pub type PublicKey = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// Shard identifier (u16 supports up to 65536 shards).
pub type ShardId = u16;

/// An opaque transaction record.
///
/// The ledger core never inspects record contents; amount and balance
/// semantics belong to the caller. Records are carried byte-for-byte from
/// the pending queue into sealed blocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TransactionRecord(pub Vec<u8>);

impl TransactionRecord {
    /// Wrap raw record bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Record contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Record length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for TransactionRecord {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for TransactionRecord {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}
