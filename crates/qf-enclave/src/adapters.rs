//! Signature-verifier adapters.

use crate::ports::SignatureVerifier;
use shared_crypto::{Ed25519PublicKey, Ed25519Signature};
use shared_types::PublicKey;

/// Production verifier backed by Ed25519.
///
/// Malformed keys or signatures verify as `false`; the capability has no
/// error channel by contract.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, public_key: &PublicKey, message: &[u8], signature: &[u8]) -> bool {
        let Ok(key) = Ed25519PublicKey::from_bytes(*public_key) else {
            return false;
        };
        let Ok(signature) = Ed25519Signature::from_slice(signature) else {
            return false;
        };
        key.verify(message, &signature).is_ok()
    }
}

/// Test double that accepts every signature.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAllVerifier;

impl SignatureVerifier for AcceptAllVerifier {
    fn verify(&self, _public_key: &PublicKey, _message: &[u8], _signature: &[u8]) -> bool {
        true
    }
}
