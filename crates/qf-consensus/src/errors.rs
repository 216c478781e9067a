//! Consensus error types.

use thiserror::Error;

/// Validator-selection and stake-ledger errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsensusError {
    /// No validator has stake; stake-weighted selection is impossible.
    #[error("No validators available: total stake is zero")]
    NoValidators,

    /// The authority set is empty.
    #[error("No authorities registered")]
    NoAuthorities,

    /// Withdrawal exceeds the staked amount.
    #[error("Insufficient stake: {available} available, {requested} requested")]
    InsufficientStake {
        /// Currently staked amount
        available: u64,
        /// Requested withdrawal
        requested: u64,
    },

    /// Authority weights must be at least 1.
    #[error("Invalid authority weight: {0}")]
    InvalidWeight(u64),
}
