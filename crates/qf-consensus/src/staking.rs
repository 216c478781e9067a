//! # Staking Pool
//!
//! The stake ledger: staked amounts and accumulated rewards per validator.
//!
//! Entries live in a `BTreeMap`, which fixes the enumeration order the
//! selection walk depends on. A validator whose stake drops to zero stays
//! listed; zero-stake entries simply never win a draw (except for the
//! documented first-entry boundary, see [`crate::selection`]).

use crate::errors::ConsensusError;
use serde::{Deserialize, Serialize};
use shared_types::Address;
use std::collections::BTreeMap;
use tracing::debug;

/// Stake and reward bookkeeping per validator address.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StakingPool {
    stakes: BTreeMap<Address, u64>,
    rewards: BTreeMap<Address, u64>,
}

impl StakingPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the validator's stake.
    pub fn stake(&mut self, validator: Address, amount: u64) {
        let entry = self.stakes.entry(validator).or_insert(0);
        *entry += amount;
        debug!(
            validator = %hex::encode(validator),
            amount,
            total = *entry,
            "stake added"
        );
    }

    /// Withdraw `amount` from the validator's stake.
    pub fn withdraw(&mut self, validator: &Address, amount: u64) -> Result<(), ConsensusError> {
        let available = self.stake_of(validator);
        if available < amount {
            return Err(ConsensusError::InsufficientStake {
                available,
                requested: amount,
            });
        }
        self.stakes.insert(*validator, available - amount);
        debug!(
            validator = %hex::encode(validator),
            amount,
            remaining = available - amount,
            "stake withdrawn"
        );
        Ok(())
    }

    /// Staked amount for a validator (zero if unknown).
    pub fn stake_of(&self, validator: &Address) -> u64 {
        self.stakes.get(validator).copied().unwrap_or(0)
    }

    /// Sum of all staked amounts.
    pub fn total_stake(&self) -> u64 {
        self.stakes.values().sum()
    }

    /// Credit a selection reward to a validator.
    pub fn credit_reward(&mut self, validator: &Address, amount: u64) {
        *self.rewards.entry(*validator).or_insert(0) += amount;
    }

    /// Accumulated reward for a validator (zero if unknown).
    pub fn reward_of(&self, validator: &Address) -> u64 {
        self.rewards.get(validator).copied().unwrap_or(0)
    }

    /// Number of listed validators.
    pub fn validator_count(&self) -> usize {
        self.stakes.len()
    }

    /// Whether no validator is listed.
    pub fn is_empty(&self) -> bool {
        self.stakes.is_empty()
    }

    /// Validators and stakes in fixed (sorted-address) order.
    pub fn stakes(&self) -> impl Iterator<Item = (&Address, &u64)> {
        self.stakes.iter()
    }
}
