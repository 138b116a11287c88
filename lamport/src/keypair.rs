//! Contains the [`KeyPair`] type

use crate::error::Result;
use crate::private::SigningKey;
use crate::public::VerifyingKey;
use crate::shared::SharedSigningKey;
use rand_core::CryptoRngCore;
use ::signature::Keypair;

// implements the Keypair trait for SigningKey
impl Keypair for SigningKey {
    type VerifyingKey = VerifyingKey;

    fn verifying_key(&self) -> Self::VerifyingKey {
        VerifyingKey::from(self)
    }
}

/// A freshly generated signing key together with its verifying key.
#[derive(Debug)]
pub struct KeyPair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl KeyPair {
    /// Generates a random key pair.
    pub fn generate(rng: &mut impl CryptoRngCore) -> Result<Self> {
        let signing_key = SigningKey::generate(rng)?;
        let verifying_key = VerifyingKey::from(&signing_key);
        Ok(Self {
            signing_key,
            verifying_key,
        })
    }

    /// Returns a reference to the signing key.
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    /// Returns a reference to the verifying key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Splits the pair so the signing key can be consumed by signing.
    pub fn into_parts(self) -> (SigningKey, VerifyingKey) {
        (self.signing_key, self.verifying_key)
    }

    /// Moves the signing key into a [`SharedSigningKey`].
    pub fn into_shared(self) -> SharedSigningKey {
        SharedSigningKey::new(self.signing_key)
    }
}

#[cfg(test)]
mod tests {
    use super::KeyPair;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;
    use ::signature::Keypair;

    #[test]
    fn halves_match() {
        let kp = KeyPair::generate(&mut ChaCha20Rng::seed_from_u64(1)).unwrap();
        assert_eq!(&Keypair::verifying_key(kp.signing_key()), kp.verifying_key());

        let (sk, pk) = kp.into_parts();
        let sig = sk.sign_with_rng(&mut ChaCha20Rng::seed_from_u64(2), b"pair").unwrap();
        assert!(pk.is_valid(b"pair", &sig));
    }
}
