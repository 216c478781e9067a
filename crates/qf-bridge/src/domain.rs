//! Transfer entities.

use serde::{Deserialize, Serialize};
use shared_types::Address;

/// A cross-chain transfer awaiting oracle verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Chain the assets leave.
    pub from_chain: String,
    /// Chain the assets arrive on.
    pub to_chain: String,
    /// Sending address on the source chain.
    pub sender: Address,
    /// Receiving address on the destination chain.
    pub receiver: Address,
    /// Amount in base units; content semantics stay with the caller.
    pub amount: u64,
}

impl TransferRequest {
    /// Build a transfer request.
    pub fn new(
        from_chain: impl Into<String>,
        to_chain: impl Into<String>,
        sender: Address,
        receiver: Address,
        amount: u64,
    ) -> Self {
        Self {
            from_chain: from_chain.into(),
            to_chain: to_chain.into(),
            sender,
            receiver,
            amount,
        }
    }
}

/// Proof that a transfer cleared the oracle quorum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    /// Oracles that reported the transfer verified.
    pub verified_by: usize,
    /// Oracles polled before the quorum was reached.
    pub oracles_polled: usize,
}
