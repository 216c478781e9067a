//! Shard: one independent chain plus its pending queue.

use crate::domain::block::Block;
use serde::{Deserialize, Serialize};
use shared_types::{Hash, ShardId, TransactionRecord};
use std::collections::VecDeque;
use tracing::info;

/// An independently-chained partition of the ledger.
///
/// Created with exactly one genesis block; every later block is sealed
/// against the chain tip before it is appended, so
/// `chain[i].previous_hash == chain[i-1].hash` holds for all non-genesis
/// blocks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Shard {
    id: ShardId,
    chain: Vec<Block>,
    pending: VecDeque<TransactionRecord>,
}

impl Shard {
    /// Create a shard with its genesis block stamped at `timestamp`.
    pub fn new(id: ShardId, timestamp: u64) -> Self {
        Self {
            id,
            chain: vec![Block::genesis(id, timestamp)],
            pending: VecDeque::new(),
        }
    }

    /// Shard identifier.
    pub fn id(&self) -> ShardId {
        self.id
    }

    /// The chain tip.
    pub fn latest_block(&self) -> &Block {
        self.chain
            .last()
            .expect("a shard always holds at least its genesis block")
    }

    /// Block at `height`, if present (genesis is height 0).
    pub fn block(&self, height: usize) -> Option<&Block> {
        self.chain.get(height)
    }

    /// Number of blocks on the chain, genesis included.
    pub fn height(&self) -> usize {
        self.chain.len()
    }

    /// The full chain, genesis first.
    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    /// Queue a transaction record for the next block.
    pub fn submit_transaction(&mut self, record: TransactionRecord) {
        self.pending.push_back(record);
    }

    /// Number of queued records.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Remove and return all queued records in submission order.
    pub fn drain_pending(&mut self) -> Vec<TransactionRecord> {
        self.pending.drain(..).collect()
    }

    /// Seal `transactions` into a new block chained to the tip and append
    /// it. Returns the new block's hash.
    ///
    /// Never rejects records for content reasons; content validity is the
    /// caller's concern.
    pub fn add_block(
        &mut self,
        transactions: Vec<TransactionRecord>,
        timestamp: u64,
        difficulty: u32,
    ) -> Hash {
        let mut block = Block::new(timestamp, transactions, *self.latest_block().hash(), self.id);
        block.seal(difficulty);

        let hash = *block.hash();
        info!(
            shard = self.id,
            height = self.chain.len(),
            transactions = block.transactions().len(),
            nonce = block.nonce(),
            hash = %hex::encode(hash),
            "block appended"
        );
        self.chain.push(block);
        hash
    }
}

#[cfg(test)]
impl Shard {
    /// Test-only: build a shard around an arbitrary chain.
    pub(crate) fn from_chain(id: ShardId, chain: Vec<Block>) -> Self {
        Self {
            id,
            chain,
            pending: VecDeque::new(),
        }
    }
}
