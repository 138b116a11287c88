use lamport_signature::constants::N;
use lamport_signature::{HexLines, KeyPair, Signature, verify};
use proptest::prelude::*;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sign_then_verify(seed: u64, msg in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (sk, pk) = KeyPair::generate(&mut rng).unwrap().into_parts();
        let sig = sk.sign_with_rng(&mut rng, &msg).unwrap();

        prop_assert!(pk.is_valid(&msg, &sig));
        prop_assert_eq!(verify(&pk, &msg, sig.elements()), Ok(true));
    }

    #[test]
    fn flipped_message_bit_rejected(
        seed: u64,
        msg in prop::collection::vec(any::<u8>(), 1..256),
        pos: prop::sample::Index,
        bit in 0u8..8,
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (sk, pk) = KeyPair::generate(&mut rng).unwrap().into_parts();
        let sig = sk.sign_with_rng(&mut rng, &msg).unwrap();

        let mut tampered = msg.clone();
        tampered[pos.index(msg.len())] ^= 1 << bit;
        prop_assert!(!pk.is_valid(&tampered, &sig));
    }

    #[test]
    fn replaced_element_rejected(
        seed: u64,
        pos: prop::sample::Index,
        replacement: [u8; N],
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (sk, pk) = KeyPair::generate(&mut rng).unwrap().into_parts();
        let sig = sk.sign_with_rng(&mut rng, b"fixed message").unwrap();

        let mut elements = sig.elements().to_vec();
        let pos = pos.index(elements.len());
        prop_assume!(elements[pos] != replacement);
        elements[pos] = replacement;

        let tampered = Signature::from_elements(&elements).unwrap();
        prop_assert!(!pk.is_valid(b"fixed message", &tampered));
    }

    #[test]
    fn hex_lines_roundtrip(seed: u64) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let kp = KeyPair::generate(&mut rng).unwrap();
        let pk = kp.verifying_key().clone();

        let text = kp.signing_key().to_hex_lines().to_uppercase().replace('\n', "\r\n");
        let sk = lamport_signature::SigningKey::from_hex_lines(&text).unwrap();
        prop_assert_eq!(sk.verifying_key(), pk);
    }
}
