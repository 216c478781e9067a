//! # Authority-Weighted Selection
//!
//! Proof-of-authority policy: its own ledger of authority weights and the
//! same cumulative-walk draw as the stake policy. No reward accrues to
//! authorities.

use crate::errors::ConsensusError;
use crate::selection::weighted_pick;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::Address;
use std::collections::BTreeMap;
use tracing::info;

/// Authority registry with weighted selection.
#[derive(Clone, Debug)]
pub struct ProofOfAuthority<R = StdRng> {
    weights: BTreeMap<Address, u64>,
    rng: R,
}

impl ProofOfAuthority<StdRng> {
    /// Policy with entropy-seeded randomness.
    pub fn new() -> Self {
        Self {
            weights: BTreeMap::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Policy with a fixed seed, for reproducible selection.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            weights: BTreeMap::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ProofOfAuthority<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ProofOfAuthority<R> {
    /// Policy over a caller-supplied generator.
    pub fn with_rng(rng: R) -> Self {
        Self {
            weights: BTreeMap::new(),
            rng,
        }
    }

    /// Register an authority with the given weight (≥ 1). Re-registering
    /// replaces the previous weight.
    pub fn register(&mut self, authority: Address, weight: u64) -> Result<(), ConsensusError> {
        if weight == 0 {
            return Err(ConsensusError::InvalidWeight(weight));
        }
        self.weights.insert(authority, weight);
        Ok(())
    }

    /// Remove an authority; returns whether it was registered.
    pub fn revoke(&mut self, authority: &Address) -> bool {
        self.weights.remove(authority).is_some()
    }

    /// Weight of an authority (zero if unregistered).
    pub fn weight_of(&self, authority: &Address) -> u64 {
        self.weights.get(authority).copied().unwrap_or(0)
    }

    /// Number of registered authorities.
    pub fn authority_count(&self) -> usize {
        self.weights.len()
    }

    /// Whether no authority is registered.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Select the next authority, weighted by registered weight.
    ///
    /// Fails with [`ConsensusError::NoAuthorities`] when the set is empty.
    pub fn select_authority(&mut self) -> Result<Address, ConsensusError> {
        if self.weights.is_empty() {
            return Err(ConsensusError::NoAuthorities);
        }

        let total: u64 = self.weights.values().sum();
        let draw = self.rng.gen_range(0..total);
        let winner = *weighted_pick(self.weights.iter(), draw)
            .ok_or(ConsensusError::NoAuthorities)?;

        info!(
            authority = %hex::encode(winner),
            draw,
            total_weight = total,
            "authority selected by weight"
        );
        Ok(winner)
    }
}
