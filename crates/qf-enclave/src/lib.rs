//! # QF Enclave
//!
//! Threshold authorization for sensitive transactions.
//!
//! The [`SecureEnclave`] collects signatures per transaction id and
//! reports a transaction fully authorized once the distinct-signer count
//! reaches the caller's threshold. Signature bytes are opaque to the
//! enclave; cryptographic verification is the injected
//! [`SignatureVerifier`] capability (an Ed25519 adapter is provided).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod enclave;
pub mod ports;

// Re-exports
pub use adapters::{AcceptAllVerifier, Ed25519Verifier};
pub use enclave::{SecureEnclave, TxId};
pub use ports::SignatureVerifier;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
