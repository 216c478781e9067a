//! Governance error types.

use crate::proposal::ProposalId;
use thiserror::Error;

/// Proposal lifecycle errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GovernanceError {
    /// No proposal registered under this id.
    #[error("Proposal not found: {0}")]
    ProposalNotFound(ProposalId),

    /// Voting window has closed.
    #[error("Proposal {id} expired at {expires_at} (now {now})")]
    ProposalExpired {
        /// Proposal id
        id: ProposalId,
        /// Expiry timestamp
        expires_at: u64,
        /// Observed current time
        now: u64,
    },

    /// A proposal with this id already exists.
    #[error("Duplicate proposal: {0}")]
    DuplicateProposal(ProposalId),
}
