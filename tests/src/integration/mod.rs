//! Cross-crate integration flows.

pub mod consensus_flow;
pub mod enclave_flow;
pub mod governance_flow;
pub mod ledger_flow;
