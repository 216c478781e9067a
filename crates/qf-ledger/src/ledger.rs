//! Sharded ledger aggregate root.

use crate::config::LedgerConfig;
use crate::domain::errors::LedgerError;
use crate::domain::invariants::invariant_chain_linkage;
use crate::domain::shard::Shard;
use crate::manager::{ShardAdjustment, ShardManager};
use qf_bridge::{CrossChainBridge, Oracle};
use qf_consensus::{ConsensusError, ProofOfAuthority, ProofOfStake, StakingPool};
use qf_enclave::{SecureEnclave, SignatureVerifier};
use qf_governance::Governance;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Clock, Hash, ShardId, TransactionRecord};
use std::sync::Arc;
use tracing::info;

/// Which selection policy answers for the next proposer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsensusPolicy {
    /// Stake-weighted selection over the staking pool.
    Stake,
    /// Authority-weighted selection over the registered authorities.
    Authority,
}

/// The aggregate root: owns the shard set and composes the consensus
/// policies, governance, bridge, and enclave.
///
/// All mutation goes through `&mut self`, which serializes writers per
/// ledger; only proof-of-work sealing fans out across shards (each shard
/// chain is independently owned, so sealing needs no cross-shard lock).
pub struct ShardedLedger {
    shards: Vec<Shard>,
    difficulty: u32,
    policy: ConsensusPolicy,
    shard_manager: ShardManager,
    staking_pool: StakingPool,
    proof_of_stake: ProofOfStake,
    proof_of_authority: ProofOfAuthority,
    governance: Governance,
    bridge: CrossChainBridge,
    enclave: SecureEnclave,
    clock: Arc<dyn Clock>,
}

impl ShardedLedger {
    /// Compose a ledger: `config.shards` genesis shards stamped at the
    /// current time, a bridge over `oracles` at `config.bridge_quorum`,
    /// and an enclave over `verifier`.
    pub fn new(
        config: &LedgerConfig,
        clock: Arc<dyn Clock>,
        oracles: Vec<Arc<dyn Oracle>>,
        verifier: Arc<dyn SignatureVerifier>,
    ) -> Result<Self, LedgerError> {
        let now = clock.now();
        let shards = (0..config.shards)
            .map(|id| Shard::new(id as ShardId, now))
            .collect();

        info!(
            shards = config.shards,
            difficulty = config.difficulty,
            bridge_quorum = config.bridge_quorum,
            "ledger composed"
        );
        Ok(Self {
            shards,
            difficulty: config.difficulty,
            policy: ConsensusPolicy::Stake,
            shard_manager: ShardManager::new(config.shard_threshold),
            staking_pool: StakingPool::new(),
            proof_of_stake: ProofOfStake::new(config.validator_reward),
            proof_of_authority: ProofOfAuthority::new(),
            governance: Governance::new(clock.clone()),
            bridge: CrossChainBridge::new(oracles, config.bridge_quorum)?,
            enclave: SecureEnclave::new(verifier),
            clock,
        })
    }

    /// Number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Shard by id.
    pub fn shard(&self, shard_id: ShardId) -> Result<&Shard, LedgerError> {
        self.shards
            .get(shard_id as usize)
            .ok_or(LedgerError::UnknownShard(shard_id))
    }

    fn shard_mut(&mut self, shard_id: ShardId) -> Result<&mut Shard, LedgerError> {
        self.shards
            .get_mut(shard_id as usize)
            .ok_or(LedgerError::UnknownShard(shard_id))
    }

    /// Queue a record on a shard's pending queue.
    pub fn submit_transaction(
        &mut self,
        shard_id: ShardId,
        record: TransactionRecord,
    ) -> Result<(), LedgerError> {
        self.shard_mut(shard_id)?.submit_transaction(record);
        Ok(())
    }

    /// Drain one shard's pending queue into a sealed block. Returns the
    /// new block's hash. An empty queue commits an empty block.
    pub fn commit_pending(&mut self, shard_id: ShardId) -> Result<Hash, LedgerError> {
        let now = self.clock.now();
        let difficulty = self.difficulty;
        let shard = self.shard_mut(shard_id)?;
        let records = shard.drain_pending();
        Ok(shard.add_block(records, now, difficulty))
    }

    /// Seal every shard's non-empty pending queue, in parallel across
    /// shards. Returns (shard, block hash) per sealed block, in shard
    /// order.
    pub fn commit_all_pending(&mut self) -> Vec<(ShardId, Hash)> {
        let now = self.clock.now();
        let difficulty = self.difficulty;
        self.shards
            .par_iter_mut()
            .filter(|shard| shard.pending_len() > 0)
            .map(|shard| {
                let records = shard.drain_pending();
                (shard.id(), shard.add_block(records, now, difficulty))
            })
            .collect()
    }

    /// Run one elastic-resharding pass.
    pub fn rebalance_shards(&mut self) -> ShardAdjustment {
        let now = self.clock.now();
        self.shard_manager.adjust(&mut self.shards, now)
    }

    /// Ask the active policy for the next block proposer.
    pub fn next_proposer(&mut self) -> Result<Address, ConsensusError> {
        match self.policy {
            ConsensusPolicy::Stake => self.select_validator(),
            ConsensusPolicy::Authority => self.select_authority(),
        }
    }

    /// Stake-weighted selection (credits the winner's reward).
    pub fn select_validator(&mut self) -> Result<Address, ConsensusError> {
        self.proof_of_stake.select_validator(&mut self.staking_pool)
    }

    /// Authority-weighted selection.
    pub fn select_authority(&mut self) -> Result<Address, ConsensusError> {
        self.proof_of_authority.select_authority()
    }

    /// Active selection policy.
    pub fn policy(&self) -> ConsensusPolicy {
        self.policy
    }

    /// Switch the selection policy (typically after a governance vote).
    pub fn set_policy(&mut self, policy: ConsensusPolicy) {
        info!(?policy, "consensus policy switched");
        self.policy = policy;
    }

    /// Current proof-of-work difficulty.
    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Change the proof-of-work difficulty for future blocks.
    pub fn set_difficulty(&mut self, difficulty: u32) {
        info!(difficulty, "difficulty changed");
        self.difficulty = difficulty;
    }

    /// Stake ledger.
    pub fn staking_pool(&self) -> &StakingPool {
        &self.staking_pool
    }

    /// Stake ledger, mutable (staking and withdrawal).
    pub fn staking_pool_mut(&mut self) -> &mut StakingPool {
        &mut self.staking_pool
    }

    /// Authority registry, mutable (registration and revocation).
    pub fn authorities_mut(&mut self) -> &mut ProofOfAuthority {
        &mut self.proof_of_authority
    }

    /// Governance service.
    pub fn governance(&self) -> &Governance {
        &self.governance
    }

    /// Governance service, mutable (propose, vote, tally).
    pub fn governance_mut(&mut self) -> &mut Governance {
        &mut self.governance
    }

    /// Cross-chain bridge.
    pub fn bridge(&self) -> &CrossChainBridge {
        &self.bridge
    }

    /// Secure enclave.
    pub fn enclave(&self) -> &SecureEnclave {
        &self.enclave
    }

    /// Secure enclave, mutable (signature collection).
    pub fn enclave_mut(&mut self) -> &mut SecureEnclave {
        &mut self.enclave
    }

    /// Re-check hash integrity and chain linkage of every shard.
    pub fn validate(&self) -> Result<(), LedgerError> {
        for shard in &self.shards {
            invariant_chain_linkage(shard)?;
        }
        Ok(())
    }
}
