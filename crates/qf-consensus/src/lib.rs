//! # QF Consensus
//!
//! Validator selection for the sharded ledger.
//!
//! Two policies are provided:
//! - **Stake-weighted** ([`ProofOfStake`]): draws from a [`StakingPool`],
//!   crediting a fixed reward to the selected validator.
//! - **Authority-weighted** ([`ProofOfAuthority`]): draws from its own
//!   ledger of authority weights (each ≥ 1).
//!
//! Both policies share the cumulative-walk selection in
//! [`selection::weighted_pick`] and take their randomness from an injected
//! seedable generator, so tests can fix the seed and assert exact
//! outcomes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod authority;
pub mod errors;
pub mod selection;
pub mod staking;

// Re-exports
pub use authority::ProofOfAuthority;
pub use errors::ConsensusError;
pub use selection::{weighted_pick, ProofOfStake};
pub use staking::StakingPool;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
