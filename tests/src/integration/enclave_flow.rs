//! # Enclave Flow
//!
//! Threshold authorization with real Ed25519 material: signatures are
//! produced by keypairs, checked through the enclave's verification
//! capability, and collected up to the threshold.

#[cfg(test)]
mod tests {
    use qf_enclave::{Ed25519Verifier, SecureEnclave, TxId};
    use shared_crypto::{sha256_hash, Ed25519KeyPair};
    use std::sync::Arc;

    fn enclave() -> SecureEnclave {
        SecureEnclave::new(Arc::new(Ed25519Verifier))
    }

    #[test]
    fn test_two_of_two_authorization() {
        let mut enclave = enclave();
        let payload = b"transfer 500 to 0xBB";
        let tx: TxId = sha256_hash(payload);

        let alice = Ed25519KeyPair::from_seed([1u8; 32]);
        let bob = Ed25519KeyPair::from_seed([2u8; 32]);

        let sig_a = alice.sign(payload).to_vec();
        let sig_b = bob.sign(payload).to_vec();

        // Both signatures check out against the capability.
        assert!(enclave.verify_signature(alice.public_key().as_bytes(), payload, &sig_a));
        assert!(enclave.verify_signature(bob.public_key().as_bytes(), payload, &sig_b));

        // One signer is pending, the second reaches the threshold.
        assert!(!enclave.sign_transaction(tx, alice.address(), sig_a, 2));
        assert!(enclave.sign_transaction(tx, bob.address(), sig_b, 2));

        // A re-sign by the first signer overwrites without shrinking the
        // set: the transaction stays authorized.
        let sig_a2 = alice.sign(payload).to_vec();
        assert!(enclave.sign_transaction(tx, alice.address(), sig_a2, 2));
        assert_eq!(enclave.signer_count(&tx), 2);
    }

    #[test]
    fn test_forged_signature_fails_verification() {
        let enclave = enclave();
        let payload = b"transfer 500 to 0xBB";

        let alice = Ed25519KeyPair::from_seed([1u8; 32]);
        let mallory = Ed25519KeyPair::from_seed([66u8; 32]);
        let forged = mallory.sign(payload).to_vec();

        assert!(!enclave.verify_signature(alice.public_key().as_bytes(), payload, &forged));
    }

    #[test]
    fn test_transactions_collect_independently() {
        let mut enclave = enclave();
        let alice = Ed25519KeyPair::from_seed([1u8; 32]);

        let tx_1: TxId = sha256_hash(b"payload-1");
        let tx_2: TxId = sha256_hash(b"payload-2");

        enclave.sign_transaction(tx_1, alice.address(), alice.sign(b"payload-1").to_vec(), 2);
        assert_eq!(enclave.signer_count(&tx_1), 1);
        assert_eq!(enclave.signer_count(&tx_2), 0);
    }

    #[test]
    fn test_three_of_five_board_authorization() {
        let mut enclave = enclave();
        let payload = b"rotate treasury key";
        let tx: TxId = sha256_hash(payload);

        let board: Vec<Ed25519KeyPair> =
            (1u8..=5).map(|i| Ed25519KeyPair::from_seed([i; 32])).collect();

        for (i, member) in board.iter().take(2).enumerate() {
            let authorized =
                enclave.sign_transaction(tx, member.address(), member.sign(payload).to_vec(), 3);
            assert!(!authorized, "member {i} must not complete the quorum");
        }

        let third = &board[2];
        assert!(enclave.sign_transaction(tx, third.address(), third.sign(payload).to_vec(), 3));
    }
}
