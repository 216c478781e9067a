//! # Domain Invariants
//!
//! Rules that must always hold for a shard's chain.

use crate::domain::errors::LedgerError;
use crate::domain::shard::Shard;
use shared_types::Hash;

/// Sentinel previous-hash of every genesis block.
pub const GENESIS_PARENT: Hash = [0u8; 32];

/// The shard set never shrinks below one shard.
pub const MIN_SHARD_COUNT: usize = 1;

/// Invariant: every block's stored hash matches its recomputed hash, the
/// genesis parent is the sentinel, and every non-genesis block links to
/// its predecessor's hash.
pub fn invariant_chain_linkage(shard: &Shard) -> Result<(), LedgerError> {
    let chain = shard.chain();
    for (height, block) in chain.iter().enumerate() {
        if *block.hash() != block.compute_hash() {
            return Err(LedgerError::HashMismatch {
                shard: shard.id(),
                height,
            });
        }

        let expected_parent = if height == 0 {
            &GENESIS_PARENT
        } else {
            chain[height - 1].hash()
        };
        if block.previous_hash() != expected_parent {
            return Err(LedgerError::BrokenChain {
                shard: shard.id(),
                height,
            });
        }
    }
    Ok(())
}
