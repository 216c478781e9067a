//! Cross-chain bridge: the quorum protocol.

use crate::domain::{TransferReceipt, TransferRequest};
use crate::errors::BridgeError;
use crate::ports::Oracle;
use std::sync::Arc;
use tracing::{info, warn};

/// Quorum-gated transfer verification over an ordered oracle set.
pub struct CrossChainBridge {
    oracles: Vec<Arc<dyn Oracle>>,
    quorum: usize,
}

impl CrossChainBridge {
    /// Bridge over `oracles` requiring `quorum` verifications.
    ///
    /// Fails with [`BridgeError::InvalidQuorum`] when the quorum exceeds
    /// the oracle count: such a quorum could never be reached.
    pub fn new(oracles: Vec<Arc<dyn Oracle>>, quorum: usize) -> Result<Self, BridgeError> {
        if quorum > oracles.len() {
            return Err(BridgeError::InvalidQuorum {
                quorum,
                oracles: oracles.len(),
            });
        }
        Ok(Self { oracles, quorum })
    }

    /// Required number of verifications.
    pub fn quorum(&self) -> usize {
        self.quorum
    }

    /// Number of configured oracles.
    pub fn oracle_count(&self) -> usize {
        self.oracles.len()
    }

    /// Verify a transfer against the oracle quorum.
    ///
    /// Oracles are polled one at a time in their fixed order; the poll
    /// stops the instant the quorum is reached, so later oracles never
    /// see the request. A quorum of zero succeeds without polling. If
    /// every oracle has answered and the quorum is still short, the
    /// transfer fails with [`BridgeError::QuorumNotReached`].
    pub async fn transfer_assets(
        &self,
        request: &TransferRequest,
    ) -> Result<TransferReceipt, BridgeError> {
        if self.quorum == 0 {
            info!(
                from_chain = %request.from_chain,
                to_chain = %request.to_chain,
                "transfer accepted: zero quorum"
            );
            return Ok(TransferReceipt {
                verified_by: 0,
                oracles_polled: 0,
            });
        }

        let mut verified = 0usize;
        let mut polled = 0usize;

        for oracle in &self.oracles {
            polled += 1;
            if oracle.verify_transfer(request).await {
                verified += 1;
                if verified >= self.quorum {
                    info!(
                        from_chain = %request.from_chain,
                        to_chain = %request.to_chain,
                        amount = request.amount,
                        verified,
                        polled,
                        "cross-chain transfer verified"
                    );
                    return Ok(TransferReceipt {
                        verified_by: verified,
                        oracles_polled: polled,
                    });
                }
            }
        }

        warn!(
            from_chain = %request.from_chain,
            to_chain = %request.to_chain,
            verified,
            required = self.quorum,
            "cross-chain transfer failed oracle verification"
        );
        Err(BridgeError::QuorumNotReached {
            verified,
            required: self.quorum,
        })
    }
}
