//! Block construction and proof-of-work sealing.

use crate::domain::errors::LedgerError;
use crate::domain::invariants::GENESIS_PARENT;
use serde::{Deserialize, Serialize};
use shared_crypto::{leading_zero_nibbles, Sha256Hasher};
use shared_types::{Hash, ShardId, TransactionRecord};
use tracing::debug;

/// Whether a hash satisfies the difficulty predicate: at least
/// `difficulty` leading zero hex characters.
///
/// A 32-byte hash has 64 hex characters, so difficulties above 64 are
/// never satisfied.
pub fn meets_difficulty(hash: &Hash, difficulty: u32) -> bool {
    leading_zero_nibbles(hash) >= difficulty
}

/// One unit of committed transactions on a shard's chain.
///
/// The stored hash always equals the hash of the canonical preimage
/// (timestamp, transactions, previous hash, nonce, shard id); sealing
/// mutates the nonce and hash together until the difficulty predicate
/// holds. Once a block is appended to a chain nothing hands out `&mut`
/// access, so sealed blocks stay immutable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    timestamp: u64,
    transactions: Vec<TransactionRecord>,
    previous_hash: Hash,
    hash: Hash,
    nonce: u64,
    shard_id: ShardId,
}

impl Block {
    /// Build an unsealed block chained to `previous_hash`.
    pub fn new(
        timestamp: u64,
        transactions: Vec<TransactionRecord>,
        previous_hash: Hash,
        shard_id: ShardId,
    ) -> Self {
        let mut block = Self {
            timestamp,
            transactions,
            previous_hash,
            hash: [0u8; 32],
            nonce: 0,
            shard_id,
        };
        block.hash = block.compute_hash();
        block
    }

    /// The genesis block for a shard: empty transaction set, sentinel
    /// previous-hash, never mined.
    pub fn genesis(shard_id: ShardId, timestamp: u64) -> Self {
        Self::new(timestamp, Vec::new(), GENESIS_PARENT, shard_id)
    }

    /// Creation timestamp (Unix seconds).
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Committed transaction records, in order.
    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    /// Hash of the predecessor block.
    pub fn previous_hash(&self) -> &Hash {
        &self.previous_hash
    }

    /// This block's content hash.
    pub fn hash(&self) -> &Hash {
        &self.hash
    }

    /// Current nonce.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Owning shard.
    pub fn shard_id(&self) -> ShardId {
        self.shard_id
    }

    /// Hash of the canonical preimage. Records are length-prefixed so
    /// record boundaries cannot collide.
    pub fn compute_hash(&self) -> Hash {
        let mut hasher = Sha256Hasher::new();
        hasher.update(&self.timestamp.to_le_bytes());
        hasher.update(&(self.transactions.len() as u64).to_le_bytes());
        for record in &self.transactions {
            hasher.update(&(record.len() as u64).to_le_bytes());
            hasher.update(record.as_bytes());
        }
        hasher.update(&self.previous_hash);
        hasher.update(&self.nonce.to_le_bytes());
        hasher.update(&self.shard_id.to_le_bytes());
        hasher.finalize()
    }

    /// Whether this block already satisfies `difficulty`.
    pub fn is_sealed(&self, difficulty: u32) -> bool {
        meets_difficulty(&self.hash, difficulty)
    }

    /// Mine until the hash satisfies `difficulty`.
    ///
    /// This is the system's only CPU-bound loop and it is unbounded by
    /// contract: an unreachable difficulty (above 64) never terminates.
    /// Use [`Block::try_seal`] where a cutoff is needed.
    pub fn seal(&mut self, difficulty: u32) {
        while !meets_difficulty(&self.hash, difficulty) {
            self.nonce += 1;
            self.hash = self.compute_hash();
        }
        debug!(
            shard = self.shard_id,
            nonce = self.nonce,
            hash = %hex::encode(self.hash),
            "block sealed"
        );
    }

    /// Mine with a cutoff: fails with [`LedgerError::SealTimeout`] after
    /// `max_attempts` nonce increments. On failure the nonce and hash
    /// keep the last attempted values.
    pub fn try_seal(&mut self, difficulty: u32, max_attempts: u64) -> Result<(), LedgerError> {
        let mut attempts = 0u64;
        while !meets_difficulty(&self.hash, difficulty) {
            if attempts >= max_attempts {
                return Err(LedgerError::SealTimeout { attempts });
            }
            self.nonce += 1;
            self.hash = self.compute_hash();
            attempts += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
impl Block {
    /// Test-only: corrupt the stored hash without touching the preimage.
    pub(crate) fn corrupt_hash_for_tests(&mut self) {
        self.hash[0] ^= 0xff;
    }
}
