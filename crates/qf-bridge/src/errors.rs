//! Bridge error types.

use thiserror::Error;

/// Cross-chain transfer errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BridgeError {
    /// The oracle sequence was exhausted below the quorum.
    #[error("Quorum not reached: {verified} of {required} oracle verifications")]
    QuorumNotReached {
        /// Oracles that verified the transfer
        verified: usize,
        /// Required quorum
        required: usize,
    },

    /// Quorum exceeds the oracle count; it could never be reached.
    #[error("Invalid quorum {quorum} for {oracles} oracles")]
    InvalidQuorum {
        /// Configured quorum
        quorum: usize,
        /// Number of oracles
        oracles: usize,
    },
}
