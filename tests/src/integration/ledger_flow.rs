//! # Ledger Flow
//!
//! The sharded ledger end to end: submission, parallel sealing, elastic
//! resharding, and chain validation through the aggregate root.

#[cfg(test)]
mod tests {
    use qf_bridge::{FixedOracle, Oracle};
    use qf_enclave::AcceptAllVerifier;
    use qf_ledger::{LedgerConfig, ShardAdjustment, ShardedLedger, GENESIS_PARENT};
    use shared_types::{ManualClock, ShardId, TransactionRecord};
    use std::sync::Arc;

    fn config(shards: usize, threshold: usize) -> LedgerConfig {
        LedgerConfig {
            shards,
            difficulty: 1,
            shard_threshold: threshold,
            validator_reward: 10,
            bridge_quorum: 1,
        }
    }

    fn ledger_at(
        clock: Arc<ManualClock>,
        shards: usize,
        threshold: usize,
    ) -> ShardedLedger {
        let oracles: Vec<Arc<dyn Oracle>> = vec![Arc::new(FixedOracle::new("o", true))];
        ShardedLedger::new(&config(shards, threshold), clock, oracles, Arc::new(AcceptAllVerifier))
            .unwrap()
    }

    fn record(tag: &str, i: usize) -> TransactionRecord {
        TransactionRecord::from(format!("{tag}-{i}").as_str())
    }

    #[test]
    fn test_chains_stay_linked_across_many_blocks() {
        let clock = Arc::new(ManualClock::new(1_700_000_000));
        let mut ledger = ledger_at(clock.clone(), 2, 100);

        for round in 0..5 {
            clock.advance(10);
            for shard_id in 0..2u16 {
                for i in 0..3 {
                    ledger
                        .submit_transaction(shard_id, record("tx", round * 10 + i))
                        .unwrap();
                }
            }
            ledger.commit_all_pending();
        }

        ledger.validate().unwrap();

        // Check the linkage by hand as well: every block's parent is the
        // previous block's hash, back to the sentinel genesis parent.
        for shard_id in 0..2u16 {
            let shard = ledger.shard(shard_id).unwrap();
            assert_eq!(shard.height(), 6);
            assert_eq!(*shard.block(0).unwrap().previous_hash(), GENESIS_PARENT);
            for height in 1..shard.height() {
                assert_eq!(
                    shard.block(height).unwrap().previous_hash(),
                    shard.block(height - 1).unwrap().hash(),
                );
            }
        }
    }

    #[test]
    fn test_blocks_meet_ledger_difficulty() {
        let clock = Arc::new(ManualClock::new(1_700_000_000));
        let mut ledger = ledger_at(clock, 1, 100);
        ledger.set_difficulty(2);

        ledger.submit_transaction(0, record("tx", 0)).unwrap();
        ledger.commit_pending(0).unwrap();

        assert!(ledger.shard(0).unwrap().latest_block().is_sealed(2));
        ledger.validate().unwrap();
    }

    #[test]
    fn test_resharding_grows_then_serves_the_new_shard() {
        // Threshold 5, two shards holding 11 and 10 pending records:
        // total 21 > 5 * 2, so exactly one shard is added (ids 0, 1, 2).
        let clock = Arc::new(ManualClock::new(1_700_000_000));
        let mut ledger = ledger_at(clock, 2, 5);

        for i in 0..11 {
            ledger.submit_transaction(0, record("a", i)).unwrap();
        }
        for i in 0..10 {
            ledger.submit_transaction(1, record("b", i)).unwrap();
        }

        assert_eq!(
            ledger.rebalance_shards(),
            ShardAdjustment::Expanded { shard_id: 2 }
        );
        assert_eq!(ledger.shard_count(), 3);
        let ids: Vec<ShardId> = (0..3).map(|i| ledger.shard(i).unwrap().id()).collect();
        assert_eq!(ids, vec![0, 1, 2]);

        // The new shard is immediately usable.
        ledger.submit_transaction(2, record("c", 0)).unwrap();
        ledger.commit_pending(2).unwrap();
        assert_eq!(ledger.shard(2).unwrap().height(), 2);
        ledger.validate().unwrap();

        // Once the queues drain, passes contract one shard at a time.
        ledger.commit_all_pending();
        assert_eq!(
            ledger.rebalance_shards(),
            ShardAdjustment::Contracted { shard_id: 2 }
        );
        assert_eq!(ledger.shard_count(), 2);
    }

    #[test]
    fn test_resharding_contracts_after_queues_drain() {
        let clock = Arc::new(ManualClock::new(1_700_000_000));
        let mut ledger = ledger_at(clock, 3, 5);

        // Idle queues: total 0 < 5 * (3 - 1), shrink once per pass down
        // to the floor of one shard.
        assert_eq!(
            ledger.rebalance_shards(),
            ShardAdjustment::Contracted { shard_id: 2 }
        );
        assert_eq!(
            ledger.rebalance_shards(),
            ShardAdjustment::Contracted { shard_id: 1 }
        );
        assert_eq!(ledger.rebalance_shards(), ShardAdjustment::Unchanged);
        assert_eq!(ledger.shard_count(), 1);
    }

    #[test]
    fn test_commit_timestamps_come_from_the_clock() {
        let clock = Arc::new(ManualClock::new(1_700_000_000));
        let mut ledger = ledger_at(clock.clone(), 1, 100);

        clock.set(1_700_000_777);
        ledger.submit_transaction(0, record("tx", 0)).unwrap();
        ledger.commit_pending(0).unwrap();

        assert_eq!(
            ledger.shard(0).unwrap().latest_block().timestamp(),
            1_700_000_777
        );
    }
}
