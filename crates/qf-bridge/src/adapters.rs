//! Oracle adapters: test doubles for the verification capability.

use crate::domain::TransferRequest;
use crate::ports::Oracle;
use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Coin-flip oracle: verifies each transfer with probability 1/2.
///
/// This mirrors the default verification behavior of a bridge without a
/// real chain observer behind it. Seed it for reproducible runs.
pub struct RandomOracle {
    name: String,
    rng: Mutex<StdRng>,
}

impl RandomOracle {
    /// Oracle with entropy-seeded randomness.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Oracle with a fixed seed, for reproducible verdicts.
    pub fn from_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

#[async_trait]
impl Oracle for RandomOracle {
    fn name(&self) -> &str {
        &self.name
    }

    async fn verify_transfer(&self, request: &TransferRequest) -> bool {
        let verified = self.rng.lock().gen_bool(0.5);
        debug!(
            oracle = %self.name,
            from_chain = %request.from_chain,
            to_chain = %request.to_chain,
            verified,
            "oracle verdict"
        );
        verified
    }
}

/// Oracle that always returns the same verdict.
pub struct FixedOracle {
    name: String,
    verdict: bool,
}

impl FixedOracle {
    /// Oracle pinned to `verdict`.
    pub fn new(name: impl Into<String>, verdict: bool) -> Self {
        Self {
            name: name.into(),
            verdict,
        }
    }
}

#[async_trait]
impl Oracle for FixedOracle {
    fn name(&self) -> &str {
        &self.name
    }

    async fn verify_transfer(&self, _request: &TransferRequest) -> bool {
        self.verdict
    }
}
