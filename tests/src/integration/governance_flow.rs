//! # Governance Flow
//!
//! The proposal lifecycle end to end, exercised standalone (the service
//! never needs a parent ledger) and with deterministic time.

#[cfg(test)]
mod tests {
    use qf_governance::{Governance, GovernanceError, TallyOutcome};
    use shared_types::{Address, ManualClock};
    use std::sync::Arc;

    fn addr(id: u8) -> Address {
        [id; 20]
    }

    #[test]
    fn test_full_lifecycle_propose_vote_tally() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut gov = Governance::new(clock.clone());

        gov.propose("qfp-1", "switch consensus policy to authority", 2_000)
            .unwrap();
        gov.vote("qfp-1", addr(1), true, 100).unwrap();
        gov.vote("qfp-1", addr(2), true, 250).unwrap();
        gov.vote("qfp-1", addr(3), false, 50).unwrap();

        assert_eq!(gov.tally_votes("qfp-1").unwrap(), TallyOutcome::Executed);
        assert!(gov.is_executed("qfp-1"));

        // Execution is idempotent: tallying again changes nothing.
        assert_eq!(gov.tally_votes("qfp-1").unwrap(), TallyOutcome::Executed);
    }

    #[test]
    fn test_votes_rejected_after_expiry_regardless_of_history() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut gov = Governance::new(clock.clone());

        gov.propose("qfp-1", "raise block rate", 1_500).unwrap();
        gov.vote("qfp-1", addr(1), true, 10).unwrap();

        clock.set(1_501);
        let err = gov.vote("qfp-1", addr(1), true, 10).unwrap_err();
        assert!(matches!(err, GovernanceError::ProposalExpired { .. }));

        // Votes cast in time still tally after expiry.
        assert_eq!(gov.tally_votes("qfp-1").unwrap(), TallyOutcome::Executed);
    }

    #[test]
    fn test_duplicate_proposal_id_is_rejected() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut gov = Governance::new(clock);

        gov.propose("qfp-1", "original", 2_000).unwrap();
        assert_eq!(
            gov.propose("qfp-1", "impostor", 9_000),
            Err(GovernanceError::DuplicateProposal("qfp-1".into()))
        );
        assert_eq!(gov.proposal("qfp-1").unwrap().expires_at, 2_000);
    }

    #[test]
    fn test_last_vote_per_voter_wins() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut gov = Governance::new(clock);

        gov.propose("qfp-1", "x", 2_000).unwrap();
        gov.vote("qfp-1", addr(1), true, 100).unwrap();
        gov.vote("qfp-1", addr(1), true, 40).unwrap();

        let ballots = gov.recorded_votes("qfp-1").unwrap();
        assert_eq!(ballots.len(), 1);
        assert_eq!(ballots[&addr(1)], 40);
    }

    #[test]
    fn test_unvoted_proposal_rejects_then_executes_after_support_arrives() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut gov = Governance::new(clock);

        gov.propose("qfp-1", "x", 2_000).unwrap();
        assert_eq!(gov.tally_votes("qfp-1").unwrap(), TallyOutcome::Rejected);
        assert!(!gov.is_executed("qfp-1"));

        gov.vote("qfp-1", addr(1), true, 1).unwrap();
        assert_eq!(gov.tally_votes("qfp-1").unwrap(), TallyOutcome::Executed);
    }

    #[test]
    fn test_independent_proposals_do_not_interfere() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut gov = Governance::new(clock);

        gov.propose("qfp-1", "first", 2_000).unwrap();
        gov.propose("qfp-2", "second", 2_000).unwrap();
        gov.vote("qfp-1", addr(1), true, 10).unwrap();

        assert_eq!(gov.tally_votes("qfp-1").unwrap(), TallyOutcome::Executed);
        assert_eq!(gov.tally_votes("qfp-2").unwrap(), TallyOutcome::Rejected);
    }
}
