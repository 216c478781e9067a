//! Ledger domain: blocks, shards, errors, invariants.

pub mod block;
pub mod errors;
pub mod invariants;
pub mod shard;

pub use block::{meets_difficulty, Block};
pub use errors::LedgerError;
pub use invariants::{invariant_chain_linkage, GENESIS_PARENT, MIN_SHARD_COUNT};
pub use shard::Shard;
