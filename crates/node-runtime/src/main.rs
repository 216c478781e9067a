//! # QuantumFuse Node Runtime
//!
//! Entry point wiring the sharded ledger to its collaborators and
//! walking every subsystem once:
//!
//! 1. Load configuration (environment, `QF_*` variables)
//! 2. Compose the ledger: shards, staking pool, governance, bridge
//!    (random oracles), enclave (Ed25519 verification)
//! 3. Stake validators and select proposers under the stake policy
//! 4. Pass a governance proposal switching to the authority policy
//! 5. Collect a 2-of-2 enclave authorization with real signatures
//! 6. Push a cross-chain transfer through the oracle quorum
//! 7. Submit transactions, rebalance shards, seal all pending blocks in
//!    parallel, and validate every chain

use anyhow::Result;
use qf_bridge::{Oracle, RandomOracle, TransferRequest};
use qf_enclave::Ed25519Verifier;
use qf_governance::TallyOutcome;
use qf_ledger::{ConsensusPolicy, LedgerConfig, ShardedLedger};
use shared_crypto::{sha256_hash, Ed25519KeyPair};
use shared_types::{Clock, ShardId, SystemClock, TransactionRecord};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = LedgerConfig::from_env();
    info!(?config, "starting QuantumFuse node");

    let clock = Arc::new(SystemClock);
    let oracles: Vec<Arc<dyn Oracle>> = (1..=3)
        .map(|i| Arc::new(RandomOracle::new(format!("oracle-{i}"))) as Arc<dyn Oracle>)
        .collect();
    let mut ledger = ShardedLedger::new(
        &config,
        clock.clone(),
        oracles,
        Arc::new(Ed25519Verifier),
    )?;

    // Validators hold real keys; their ledger addresses derive from them.
    let alice = Ed25519KeyPair::from_seed([1u8; 32]);
    let bob = Ed25519KeyPair::from_seed([2u8; 32]);
    let carol = Ed25519KeyPair::from_seed([3u8; 32]);

    ledger.staking_pool_mut().stake(alice.address(), 100);
    ledger.staking_pool_mut().stake(bob.address(), 200);
    ledger.staking_pool_mut().stake(carol.address(), 300);

    for _ in 0..3 {
        let proposer = ledger.next_proposer()?;
        info!(proposer = %hex::encode(proposer), "proposer selected under stake policy");
    }

    // Governance: stake-weighted vote to switch the selection policy.
    let expires_at = clock.now() + 600;
    ledger.governance_mut().propose(
        "qfp-1",
        "switch validator selection to proof-of-authority",
        expires_at,
    )?;

    let alice_weight = ledger.staking_pool().stake_of(&alice.address());
    let bob_weight = ledger.staking_pool().stake_of(&bob.address());
    ledger
        .governance_mut()
        .vote("qfp-1", alice.address(), true, alice_weight)?;
    ledger
        .governance_mut()
        .vote("qfp-1", bob.address(), true, bob_weight)?;

    if ledger.governance_mut().tally_votes("qfp-1")? == TallyOutcome::Executed {
        for (keypair, weight) in [(&alice, 1u64), (&bob, 2), (&carol, 3)] {
            ledger.authorities_mut().register(keypair.address(), weight)?;
        }
        ledger.set_policy(ConsensusPolicy::Authority);
        let authority = ledger.next_proposer()?;
        info!(authority = %hex::encode(authority), "proposer selected under authority policy");
    }

    // Enclave: a sensitive transaction needs two distinct signers.
    let payload: &[u8] = b"treasury transfer: 500 QFC to cold storage";
    let tx_id = sha256_hash(payload);
    let alice_sig = alice.sign(payload).to_vec();
    let bob_sig = bob.sign(payload).to_vec();

    let authorized =
        ledger
            .enclave_mut()
            .sign_transaction(tx_id, alice.address(), alice_sig.clone(), 2);
    info!(authorized, signer = %hex::encode(alice.address()), "signature collected");

    let authorized = ledger
        .enclave_mut()
        .sign_transaction(tx_id, bob.address(), bob_sig.clone(), 2);
    info!(authorized, signer = %hex::encode(bob.address()), "signature collected");

    let verified = ledger
        .enclave()
        .verify_signature(bob.public_key().as_bytes(), payload, &bob_sig);
    info!(verified, "spot-check of the collected signature");

    // Bridge: the transfer clears only if the oracle quorum agrees.
    let request = TransferRequest::new(
        "quantumfuse",
        "ethereum",
        alice.address(),
        bob.address(),
        500,
    );
    match ledger.bridge().transfer_assets(&request).await {
        Ok(receipt) => info!(
            verified_by = receipt.verified_by,
            polled = receipt.oracles_polled,
            "cross-chain transfer verified"
        ),
        Err(err) => warn!(%err, "cross-chain transfer rejected"),
    }

    // Load the shards, rebalance, and seal everything in parallel.
    for shard_id in 0..ledger.shard_count() as ShardId {
        for i in 0..4 {
            ledger.submit_transaction(
                shard_id,
                TransactionRecord::from(format!("demo-{shard_id}-{i}").as_str()),
            )?;
        }
    }

    let adjustment = ledger.rebalance_shards();
    info!(?adjustment, shard_count = ledger.shard_count(), "resharding pass");

    for (shard, hash) in ledger.commit_all_pending() {
        info!(shard, hash = %hex::encode(hash), "pending transactions sealed");
    }

    ledger.validate()?;
    for shard_id in 0..ledger.shard_count() as ShardId {
        let shard = ledger.shard(shard_id)?;
        info!(
            shard = shard_id,
            height = shard.height(),
            tip = %hex::encode(shard.latest_block().hash()),
            "chain valid"
        );
    }

    Ok(())
}
