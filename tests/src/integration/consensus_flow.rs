//! # Consensus Flow
//!
//! Selection distribution and failure modes across the staking pool and
//! both policies.

#[cfg(test)]
mod tests {
    use qf_consensus::{ConsensusError, ProofOfAuthority, ProofOfStake, StakingPool};
    use shared_types::Address;
    use std::collections::BTreeMap;

    fn addr(id: u8) -> Address {
        [id; 20]
    }

    #[test]
    fn test_zero_stake_always_fails() {
        let mut pool = StakingPool::new();
        let mut pos = ProofOfStake::from_seed(10, 1);
        for _ in 0..5 {
            assert_eq!(
                pos.select_validator(&mut pool),
                Err(ConsensusError::NoValidators)
            );
        }
    }

    #[test]
    fn test_selection_frequency_converges_to_stake_share() {
        let mut pool = StakingPool::new();
        pool.stake(addr(1), 100);
        pool.stake(addr(2), 200);
        pool.stake(addr(3), 300);
        pool.stake(addr(4), 400);

        let mut pos = ProofOfStake::from_seed(0, 4242);
        let trials = 10_000u32;
        let mut wins: BTreeMap<Address, u32> = BTreeMap::new();
        for _ in 0..trials {
            let winner = pos.select_validator(&mut pool).unwrap();
            *wins.entry(winner).or_insert(0) += 1;
        }

        // Expected shares 10%, 20%, 30%, 40%; allow ±4 points.
        let share = |id: u8| f64::from(wins[&addr(id)]) / f64::from(trials);
        assert!((share(1) - 0.10).abs() < 0.04, "share(1) = {}", share(1));
        assert!((share(2) - 0.20).abs() < 0.04, "share(2) = {}", share(2));
        assert!((share(3) - 0.30).abs() < 0.04, "share(3) = {}", share(3));
        assert!((share(4) - 0.40).abs() < 0.04, "share(4) = {}", share(4));
    }

    #[test]
    fn test_reward_accrues_only_through_selection() {
        let mut pool = StakingPool::new();
        pool.stake(addr(1), 100);
        pool.stake(addr(2), 100);

        let mut pos = ProofOfStake::from_seed(7, 5);
        let rounds = 200u64;
        for _ in 0..rounds {
            pos.select_validator(&mut pool).unwrap();
        }

        // Every selection credited exactly one fixed reward.
        let total_rewards = pool.reward_of(&addr(1)) + pool.reward_of(&addr(2));
        assert_eq!(total_rewards, rounds * 7);
        // Stakes are untouched by selection.
        assert_eq!(pool.total_stake(), 200);
    }

    #[test]
    fn test_withdrawal_shrinks_selection_weight() {
        let mut pool = StakingPool::new();
        pool.stake(addr(1), 100);
        pool.stake(addr(2), 100);
        pool.withdraw(&addr(2), 100).unwrap();

        // Only addr(1) carries weight now.
        let mut pos = ProofOfStake::from_seed(0, 3);
        for _ in 0..20 {
            assert_eq!(pos.select_validator(&mut pool).unwrap(), addr(1));
        }
    }

    #[test]
    fn test_empty_authority_set_always_fails() {
        let mut poa = ProofOfAuthority::from_seed(1);
        assert_eq!(poa.select_authority(), Err(ConsensusError::NoAuthorities));
    }

    #[test]
    fn test_authority_frequency_tracks_weight() {
        let mut poa = ProofOfAuthority::from_seed(99);
        poa.register(addr(1), 1).unwrap();
        poa.register(addr(2), 9).unwrap();

        let mut heavy_wins = 0u32;
        let trials = 2_000;
        for _ in 0..trials {
            if poa.select_authority().unwrap() == addr(2) {
                heavy_wins += 1;
            }
        }
        // Expected 90%; allow a generous band.
        assert!(heavy_wins > 1_600, "heavy_wins = {heavy_wins}");
    }

    #[test]
    fn test_policies_share_the_same_walk_semantics() {
        // With identical weights and the same seed, the stake policy and
        // the authority policy agree on every draw.
        let mut pool = StakingPool::new();
        let mut poa = ProofOfAuthority::from_seed(31);
        for (id, weight) in [(1u8, 50u64), (2, 150), (3, 300)] {
            pool.stake(addr(id), weight);
            poa.register(addr(id), weight).unwrap();
        }
        let mut pos = ProofOfStake::from_seed(0, 31);

        for _ in 0..50 {
            assert_eq!(
                pos.select_validator(&mut pool).unwrap(),
                poa.select_authority().unwrap()
            );
        }
    }
}
