//! Ledger error types.

use qf_bridge::BridgeError;
use shared_types::ShardId;
use thiserror::Error;

/// Sharded-ledger errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// No shard exists under this id.
    #[error("Unknown shard: {0}")]
    UnknownShard(ShardId),

    /// Bounded sealing gave up before finding a satisfying nonce.
    #[error("Sealing aborted after {attempts} nonce attempts")]
    SealTimeout {
        /// Nonce increments attempted
        attempts: u64,
    },

    /// A block's previous-hash does not match its predecessor.
    #[error("Broken chain in shard {shard} at height {height}")]
    BrokenChain {
        /// Shard holding the broken link
        shard: ShardId,
        /// Height of the offending block
        height: usize,
    },

    /// A block's stored hash does not match its recomputed hash.
    #[error("Hash mismatch in shard {shard} at height {height}")]
    HashMismatch {
        /// Shard holding the offending block
        shard: ShardId,
        /// Height of the offending block
        height: usize,
    },

    /// Bridge construction failed while composing the ledger.
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}
