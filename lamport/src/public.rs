//! Contains the [`VerifyingKey`] type

use crate::encoding;
use crate::error::{Result, malformed_key};
use crate::hash::{hash, message_digest};
use crate::private::SigningKey;
use crate::signature::Signature;
use crate::types::{Bit, HashValue, Table, empty_table};
use crate::util::{copy_exact, select};
use ::signature::{Error, Verifier};
use core::fmt;
use subtle::ConstantTimeEq;
use tracing::trace;

/// A Lamport-Diffie verifying key: the SHA-256 image of every value of a [`SigningKey`]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct VerifyingKey {
    pub(crate) tables: Box<Table>,
}

impl VerifyingKey {
    /// Builds a key from its bit-0 and bit-1 tables of hash values.
    ///
    /// Each table must contain exactly 256 values of 32 bytes.
    pub fn from_tables<V: AsRef<[u8]>>(bit0: &[V], bit1: &[V]) -> Result<Self> {
        let mut tables = empty_table();
        let [zero, one] = &mut *tables;
        copy_exact(zero, bit0).map_err(malformed_key)?;
        copy_exact(one, bit1).map_err(malformed_key)?;
        Ok(Self { tables })
    }

    /// Returns the hash value at position `index` of the `bit` table
    pub fn value(&self, bit: Bit, index: usize) -> Option<&HashValue> {
        self.tables[bit.index()].get(index)
    }

    /// Returns the whole `bit` table
    pub fn table(&self, bit: Bit) -> &[HashValue] {
        &self.tables[bit.index()]
    }

    /// Serializes the key as 256 records of `table[0][i] || table[1][i]`
    pub fn to_bytes(&self) -> Vec<u8> {
        encoding::tables_to_bytes(&self.tables)
    }

    /// Returns `true` if `signature` is a valid signature of `msg` under this key.
    ///
    /// Every revealed secret is hashed and compared in constant time against
    /// the public value selected by the corresponding bit of
    /// `SHA-256(nonce || msg)`.
    pub fn is_valid(&self, msg: &[u8], signature: &Signature) -> bool {
        let digest = message_digest(signature.nonce(), msg);
        let valid = select(&digest, &self.tables)
            .zip(signature.revealed())
            .all(|(expected, revealed)| bool::from(hash(revealed)[..].ct_eq(&expected[..])));
        trace!(valid, "verified one-time signature");
        valid
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(sk: &SigningKey) -> Self {
        let mut tables = empty_table();
        for (public, secret) in tables
            .iter_mut()
            .flatten()
            .zip(sk.tables.iter().flatten())
        {
            *public = hash(secret);
        }
        Self { tables }
    }
}

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> core::result::Result<(), Error> {
        if self.is_valid(msg, signature) {
            Ok(())
        } else {
            Err(Error::new())
        }
    }
}

impl fmt::Debug for VerifyingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyingKey")
            .field("bit0[0]", &hex::encode(self.tables[0][0]))
            .field("bit1[0]", &hex::encode(self.tables[1][0]))
            .finish_non_exhaustive()
    }
}

/// Parses a [`VerifyingKey`] from its flat record encoding
impl TryFrom<&[u8]> for VerifyingKey {
    type Error = crate::Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let mut tables = empty_table();
        encoding::tables_from_bytes(&mut tables, bytes).map_err(malformed_key)?;
        Ok(Self { tables })
    }
}

#[cfg(test)]
mod tests {
    use super::VerifyingKey;
    use crate::constants::{KEY_BYTES, N, NUM_BITS};
    use crate::error::{Error, ShapeError};
    use crate::hash::hash;
    use crate::private::SigningKey;
    use crate::types::Bit;
    use ::signature::Verifier;
    use rand::thread_rng;

    #[test]
    fn derived_from_signing_key() {
        let sk = SigningKey::generate(&mut thread_rng()).unwrap();
        let pk = VerifyingKey::from(&sk);
        for bit in [Bit::Zero, Bit::One] {
            for i in 0..NUM_BITS {
                assert_eq!(pk.value(bit, i), Some(&hash(sk.value(bit, i).unwrap())));
            }
        }
    }

    #[test]
    fn test_sign_verify() {
        let mut rng = thread_rng();
        let sk = SigningKey::generate(&mut rng).unwrap();
        let pk = sk.verifying_key();
        let msg = "this is a test message".as_bytes();

        let sig = sk.sign_with_rng(&mut rng, msg).unwrap();
        assert!(pk.is_valid(msg, &sig));
        assert!(pk.verify(msg, &sig).is_ok());
    }

    #[test]
    fn test_sign_fail_verify() {
        let mut rng = thread_rng();
        let sk = SigningKey::generate(&mut rng).unwrap();
        let other = SigningKey::generate(&mut rng).unwrap().verifying_key();
        let msg = "this is a test message".as_bytes();

        let sig = sk.sign_with_rng(&mut rng, msg).unwrap();
        assert!(!other.is_valid(msg, &sig));
        assert!(other.verify(msg, &sig).is_err());
    }

    #[test]
    fn test_serde() {
        let pk = SigningKey::generate(&mut thread_rng())
            .unwrap()
            .verifying_key();
        let bytes = pk.to_bytes();
        assert_eq!(bytes.len(), KEY_BYTES);

        let pk_deserialized = VerifyingKey::try_from(&bytes[..]).unwrap();
        assert_eq!(pk, pk_deserialized);

        let pk_short = VerifyingKey::try_from(&bytes[..KEY_BYTES - 2 * N]);
        let mut long_bytes = bytes.clone();
        long_bytes.extend_from_slice(&[0u8; 2 * N]);
        let pk_long = VerifyingKey::try_from(&long_bytes[..]);

        assert_eq!(
            pk_short,
            Err(Error::MalformedKey(ShapeError::TooFewEntries {
                expected: NUM_BITS,
                got: NUM_BITS - 1
            }))
        );
        assert_eq!(
            pk_long,
            Err(Error::MalformedKey(ShapeError::TooManyEntries {
                expected: NUM_BITS,
                got: NUM_BITS + 1
            }))
        );
    }
}
