//! # QF Bridge
//!
//! Quorum-gated cross-chain asset transfer.
//!
//! A [`CrossChainBridge`] holds an ordered set of [`Oracle`]s and a
//! quorum Q. A transfer is accepted the instant Q oracles have verified
//! it (remaining oracles are never polled); if the oracle sequence is
//! exhausted first, the transfer fails with
//! [`BridgeError::QuorumNotReached`].
//!
//! Oracle verification is a pluggable capability: production oracles
//! observe external chains, while the crate ships a seeded random double
//! and a fixed-verdict double for tests.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod bridge;
pub mod domain;
pub mod errors;
pub mod ports;

// Re-exports
pub use adapters::{FixedOracle, RandomOracle};
pub use bridge::CrossChainBridge;
pub use domain::{TransferReceipt, TransferRequest};
pub use errors::BridgeError;
pub use ports::Oracle;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
