//! Proposal entity and tally outcome.

use serde::{Deserialize, Serialize};

/// Caller-chosen proposal identifier (e.g. "qfp-1").
pub type ProposalId = String;

/// A registered governance proposal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Proposal {
    /// Human-readable description of the change.
    pub description: String,
    /// Voting closes at this timestamp (exclusive: votes must arrive
    /// strictly before it).
    pub expires_at: u64,
    /// Whether the proposal has been executed. Set at most once.
    pub executed: bool,
}

impl Proposal {
    /// Create a fresh, unexecuted proposal.
    pub fn new(description: impl Into<String>, expires_at: u64) -> Self {
        Self {
            description: description.into(),
            expires_at,
            executed: false,
        }
    }

    /// Whether the voting window is still open at `now`.
    pub fn accepts_votes_at(&self, now: u64) -> bool {
        now < self.expires_at
    }
}

/// Outcome of a tally.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TallyOutcome {
    /// Recorded weight was strictly positive; the proposal is (or already
    /// was) executed.
    Executed,
    /// No recorded weight; nothing happened.
    Rejected,
}
