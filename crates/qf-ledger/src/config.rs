//! Runtime configuration for the sharded ledger.

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Ledger knobs, overridable from the environment.
#[derive(Clone, Debug, Deserialize)]
pub struct LedgerConfig {
    /// Initial number of shards.
    pub shards: usize,

    /// Proof-of-work difficulty: required leading zero hex characters.
    pub difficulty: u32,

    /// Per-shard pending-transaction threshold driving resharding.
    pub shard_threshold: usize,

    /// Reward credited per successful validator selection.
    pub validator_reward: u64,

    /// Oracle verifications required per cross-chain transfer.
    pub bridge_quorum: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            shards: 3,
            difficulty: 4,
            shard_threshold: 100,
            validator_reward: 10,
            bridge_quorum: 2,
        }
    }
}

impl LedgerConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for unset or unparsable variables.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `QF_SHARDS` | `shards` |
    /// | `QF_MINING_DIFFICULTY` | `difficulty` |
    /// | `QF_SHARD_THRESHOLD` | `shard_threshold` |
    /// | `QF_VALIDATOR_REWARD` | `validator_reward` |
    /// | `QF_BRIDGE_QUORUM` | `bridge_quorum` |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            shards: env_or("QF_SHARDS", defaults.shards),
            difficulty: env_or("QF_MINING_DIFFICULTY", defaults.difficulty),
            shard_threshold: env_or("QF_SHARD_THRESHOLD", defaults.shard_threshold),
            validator_reward: env_or("QF_VALIDATOR_REWARD", defaults.validator_reward),
            bridge_quorum: env_or("QF_BRIDGE_QUORUM", defaults.bridge_quorum),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
