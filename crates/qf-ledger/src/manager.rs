//! Elastic resharding.

use crate::domain::shard::Shard;
use serde::{Deserialize, Serialize};
use shared_types::ShardId;
use tracing::{info, warn};

/// Outcome of one resharding pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShardAdjustment {
    /// A new empty shard was appended.
    Expanded {
        /// Id of the new shard
        shard_id: ShardId,
    },
    /// The highest-indexed shard was removed.
    Contracted {
        /// Id of the removed shard
        shard_id: ShardId,
    },
    /// Load was within bounds; nothing changed.
    Unchanged,
}

/// Grows and shrinks the shard set from aggregate pending-queue depth.
///
/// The threshold is the pending-transaction capacity one shard is
/// expected to absorb. Each pass makes at most one adjustment: grow when
/// total pending exceeds `threshold × count`, otherwise shrink when total
/// pending falls under `threshold × (count − 1)` and more than one shard
/// remains.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ShardManager {
    threshold: usize,
}

impl ShardManager {
    /// Manager with the given per-shard pending threshold.
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    /// Per-shard pending threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Run one resharding pass over `shards`. A new shard's genesis block
    /// is stamped `now`.
    pub fn adjust(&self, shards: &mut Vec<Shard>, now: u64) -> ShardAdjustment {
        let total: usize = shards.iter().map(Shard::pending_len).sum();
        let count = shards.len();

        if total > self.threshold * count {
            let shard_id = count as ShardId;
            shards.push(Shard::new(shard_id, now));
            info!(
                shard = shard_id,
                total_pending = total,
                shard_count = shards.len(),
                "shard added under high transaction volume"
            );
            return ShardAdjustment::Expanded { shard_id };
        }

        if count > 1 && total < self.threshold * (count - 1) {
            if let Some(removed) = shards.pop() {
                if removed.pending_len() > 0 {
                    warn!(
                        shard = removed.id(),
                        dropped_pending = removed.pending_len(),
                        "removed shard still held pending transactions"
                    );
                }
                info!(
                    shard = removed.id(),
                    total_pending = total,
                    shard_count = shards.len(),
                    "shard removed under low transaction volume"
                );
                return ShardAdjustment::Contracted {
                    shard_id: removed.id(),
                };
            }
        }

        ShardAdjustment::Unchanged
    }
}
