//! Oracle port.

use crate::domain::TransferRequest;
use async_trait::async_trait;

/// Independent verifier of cross-chain transfers.
///
/// Implementations may be non-deterministic (test doubles) or backed by
/// real external-chain observation. The bridge polls oracles one at a
/// time in its fixed order and stops as soon as its quorum is reached,
/// so implementations must not assume every transfer reaches them.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Oracle name, for logs.
    fn name(&self) -> &str;

    /// Report whether this oracle considers the transfer verified.
    async fn verify_transfer(&self, request: &TransferRequest) -> bool;
}
