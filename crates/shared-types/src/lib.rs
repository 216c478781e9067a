//! # Shared Types
//!
//! Domain types shared by every QuantumFuse subsystem: the primitive
//! aliases (hashes, addresses, shard identifiers), the opaque transaction
//! record, and the clock capability.
//!
//! Nothing in this crate carries behavior beyond construction and
//! accessors; subsystem semantics live in the `qf-*` crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod entities;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entities::{Address, Hash, PublicKey, ShardId, TransactionRecord};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
