//! # Stake-Weighted Selection
//!
//! The cumulative-walk draw shared by both selection policies, and the
//! stake-weighted [`ProofOfStake`] policy built on it.

use crate::errors::ConsensusError;
use crate::staking::StakingPool;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::Address;
use tracing::info;

/// Walk `entries` in order, accumulating weights, and return the first
/// entry whose cumulative weight reaches or exceeds `draw`.
///
/// `draw` is expected to come from the half-open range `[0, total)`. The
/// boundary check is `draw <= cumulative`, so the first entry enumerated
/// absorbs one extra outcome of the draw space; callers rely on this for
/// reproducible selection under a fixed seed, so it must not be changed
/// to a strict comparison.
pub fn weighted_pick<'a, I>(entries: I, draw: u64) -> Option<&'a Address>
where
    I: IntoIterator<Item = (&'a Address, &'a u64)>,
{
    let mut cumulative = 0u64;
    for (address, weight) in entries {
        cumulative += *weight;
        if draw <= cumulative {
            return Some(address);
        }
    }
    None
}

/// Stake-weighted validator selection.
///
/// Selection probability is proportional to stake; each successful
/// selection credits the validator a fixed reward in the pool.
#[derive(Clone, Debug)]
pub struct ProofOfStake<R = StdRng> {
    rng: R,
    reward: u64,
}

impl ProofOfStake<StdRng> {
    /// Policy with entropy-seeded randomness.
    pub fn new(reward: u64) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            reward,
        }
    }

    /// Policy with a fixed seed, for reproducible selection.
    pub fn from_seed(reward: u64, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            reward,
        }
    }
}

impl<R: Rng> ProofOfStake<R> {
    /// Policy over a caller-supplied generator.
    pub fn with_rng(reward: u64, rng: R) -> Self {
        Self { rng, reward }
    }

    /// Reward credited per successful selection.
    pub fn reward(&self) -> u64 {
        self.reward
    }

    /// Select the next validator, weighted by stake.
    ///
    /// Fails with [`ConsensusError::NoValidators`] when total stake is
    /// zero. On success the winner is credited the fixed reward.
    pub fn select_validator(
        &mut self,
        pool: &mut StakingPool,
    ) -> Result<Address, ConsensusError> {
        let total = pool.total_stake();
        if total == 0 {
            return Err(ConsensusError::NoValidators);
        }

        let draw = self.rng.gen_range(0..total);
        let winner = *weighted_pick(pool.stakes(), draw).ok_or(ConsensusError::NoValidators)?;

        pool.credit_reward(&winner, self.reward);
        info!(
            validator = %hex::encode(winner),
            draw,
            total_stake = total,
            "validator selected by stake weight"
        );
        Ok(winner)
    }
}
