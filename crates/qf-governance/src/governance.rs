//! Governance service: propose, vote, tally.

use crate::errors::GovernanceError;
use crate::proposal::{Proposal, ProposalId, TallyOutcome};
use shared_types::{Address, Clock};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Proposal registry and weighted-vote tally.
///
/// One vote weight is recorded per (proposal, voter); a voter's later
/// vote overwrites their earlier one. The `supports` flag is accepted for
/// the record but all recorded weight counts toward execution — the tally
/// executes on any strictly positive sum.
pub struct Governance {
    proposals: BTreeMap<ProposalId, Proposal>,
    votes: BTreeMap<ProposalId, BTreeMap<Address, u64>>,
    clock: Arc<dyn Clock>,
}

impl Governance {
    /// Governance service reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            proposals: BTreeMap::new(),
            votes: BTreeMap::new(),
            clock,
        }
    }

    /// Register a new proposal.
    ///
    /// Fails with [`GovernanceError::DuplicateProposal`] if the id is
    /// already taken; an existing proposal is never overwritten.
    pub fn propose(
        &mut self,
        id: impl Into<ProposalId>,
        description: impl Into<String>,
        expires_at: u64,
    ) -> Result<(), GovernanceError> {
        let id = id.into();
        if self.proposals.contains_key(&id) {
            return Err(GovernanceError::DuplicateProposal(id));
        }

        info!(proposal = %id, expires_at, "proposal registered");
        self.proposals.insert(id.clone(), Proposal::new(description, expires_at));
        self.votes.insert(id, BTreeMap::new());
        Ok(())
    }

    /// Record a vote. The voter's previous weight for this proposal, if
    /// any, is replaced.
    ///
    /// Fails with [`GovernanceError::ProposalNotFound`] for an unknown id
    /// and [`GovernanceError::ProposalExpired`] once the voting window
    /// has closed.
    pub fn vote(
        &mut self,
        id: &str,
        voter: Address,
        supports: bool,
        weight: u64,
    ) -> Result<(), GovernanceError> {
        let proposal = self
            .proposals
            .get(id)
            .ok_or_else(|| GovernanceError::ProposalNotFound(id.to_string()))?;

        let now = self.clock.now();
        if !proposal.accepts_votes_at(now) {
            return Err(GovernanceError::ProposalExpired {
                id: id.to_string(),
                expires_at: proposal.expires_at,
                now,
            });
        }

        info!(
            proposal = %id,
            voter = %hex::encode(voter),
            supports,
            weight,
            "vote recorded"
        );
        self.votes
            .entry(id.to_string())
            .or_default()
            .insert(voter, weight);
        Ok(())
    }

    /// Tally recorded weights and execute on a strictly positive sum.
    ///
    /// Execution is idempotent: once a proposal has executed, further
    /// tallies return [`TallyOutcome::Executed`] without re-executing. A
    /// rejection records nothing, so a later tally may still execute.
    pub fn tally_votes(&mut self, id: &str) -> Result<TallyOutcome, GovernanceError> {
        let proposal = self
            .proposals
            .get_mut(id)
            .ok_or_else(|| GovernanceError::ProposalNotFound(id.to_string()))?;

        if proposal.executed {
            debug!(proposal = %id, "already executed; tally is a no-op");
            return Ok(TallyOutcome::Executed);
        }

        let total: u64 = self
            .votes
            .get(id)
            .map(|ballots| ballots.values().sum())
            .unwrap_or(0);

        if total > 0 {
            proposal.executed = true;
            info!(proposal = %id, total_weight = total, "proposal passed; executing");
            Ok(TallyOutcome::Executed)
        } else {
            info!(proposal = %id, "proposal rejected: no recorded weight");
            Ok(TallyOutcome::Rejected)
        }
    }

    /// Look up a proposal.
    pub fn proposal(&self, id: &str) -> Option<&Proposal> {
        self.proposals.get(id)
    }

    /// Whether a proposal has executed.
    pub fn is_executed(&self, id: &str) -> bool {
        self.proposals.get(id).map(|p| p.executed).unwrap_or(false)
    }

    /// Recorded vote weights for a proposal.
    pub fn recorded_votes(&self, id: &str) -> Option<&BTreeMap<Address, u64>> {
        self.votes.get(id)
    }

    /// Number of registered proposals.
    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }
}
