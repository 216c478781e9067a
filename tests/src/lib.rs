//! # QuantumFuse Test Suite
//!
//! Unified test crate for cross-crate flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── ledger_flow.rs      # Shards, sealing, resharding, validation
//!     ├── consensus_flow.rs   # Selection distribution and failure modes
//!     ├── governance_flow.rs  # Proposal lifecycle end to end
//!     ├── bridge_flow.rs      # Oracle quorum protocol
//!     └── enclave_flow.rs     # Threshold authorization with real keys
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qf-tests
//!
//! # By flow
//! cargo test -p qf-tests integration::ledger_flow
//! ```

#![allow(unused_imports)]

pub mod integration;
