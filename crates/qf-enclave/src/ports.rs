//! Signature-verification port.

use shared_types::PublicKey;

/// The signature-verification capability.
///
/// Implementations must be deterministic and side-effect-free: the same
/// (key, message, signature) triple always yields the same verdict.
pub trait SignatureVerifier: Send + Sync {
    /// Whether `signature` is a valid signature over `message` by the
    /// holder of `public_key`.
    fn verify(&self, public_key: &PublicKey, message: &[u8], signature: &[u8]) -> bool;
}
