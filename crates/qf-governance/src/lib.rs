//! # QF Governance
//!
//! Weighted-vote governance for protocol changes.
//!
//! Per-proposal state machine:
//!
//! ```text
//! Proposed ──(votes accumulate)──> Tallied ──> Executed | Rejected
//! ```
//!
//! Votes are accepted only strictly before a proposal's expiry; execution
//! is idempotent (a proposal executes at most once, re-tallying an
//! executed proposal is a no-op). A rejected tally records nothing, so a
//! proposal that later gains weight can still execute on a re-tally.
//!
//! The service is standalone: it never assumes a parent ledger, and time
//! comes from the injected [`shared_types::Clock`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod governance;
pub mod proposal;

// Re-exports
pub use errors::GovernanceError;
pub use governance::Governance;
pub use proposal::{Proposal, ProposalId, TallyOutcome};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
