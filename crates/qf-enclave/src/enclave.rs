//! Secure enclave: multi-signature collection.

use crate::ports::SignatureVerifier;
use shared_types::{Address, Hash, PublicKey};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Transaction identifier the enclave collects signatures under.
pub type TxId = Hash;

/// Per-transaction signature collection with threshold authorization.
///
/// The signature set for a transaction only grows; a signer re-signing
/// replaces their own signature without shrinking the set. The threshold
/// is supplied per call, not stored — callers must pass a consistent
/// threshold for a given transaction across calls.
pub struct SecureEnclave {
    signatures: BTreeMap<TxId, BTreeMap<Address, Vec<u8>>>,
    verifier: Arc<dyn SignatureVerifier>,
}

impl SecureEnclave {
    /// Enclave delegating verification to `verifier`.
    pub fn new(verifier: Arc<dyn SignatureVerifier>) -> Self {
        Self {
            signatures: BTreeMap::new(),
            verifier,
        }
    }

    /// Record `signer`'s signature for `tx_id` and report whether the
    /// transaction is now fully authorized at `threshold`.
    ///
    /// Returns `true` once the distinct-signer count has reached the
    /// threshold, `false` while signatures are still outstanding.
    pub fn sign_transaction(
        &mut self,
        tx_id: TxId,
        signer: Address,
        signature: Vec<u8>,
        threshold: usize,
    ) -> bool {
        let collected = self.signatures.entry(tx_id).or_default();
        collected.insert(signer, signature);

        let signers = collected.len();
        if signers >= threshold {
            info!(
                tx = %hex::encode(tx_id),
                signers,
                threshold,
                "transaction fully authorized"
            );
            true
        } else {
            debug!(
                tx = %hex::encode(tx_id),
                signers,
                threshold,
                "transaction awaiting signatures"
            );
            false
        }
    }

    /// Delegate a signature check to the verification capability.
    pub fn verify_signature(
        &self,
        public_key: &PublicKey,
        message: &[u8],
        signature: &[u8],
    ) -> bool {
        self.verifier.verify(public_key, message, signature)
    }

    /// Distinct signers collected for a transaction.
    pub fn signer_count(&self, tx_id: &TxId) -> usize {
        self.signatures.get(tx_id).map(BTreeMap::len).unwrap_or(0)
    }

    /// A signer's recorded signature for a transaction, if any.
    pub fn signature_of(&self, tx_id: &TxId, signer: &Address) -> Option<&[u8]> {
        self.signatures
            .get(tx_id)
            .and_then(|collected| collected.get(signer))
            .map(Vec::as_slice)
    }
}
