//! Contains the [`SigningKey`] type

use crate::constants::{N, SIGNATURE_LEN};
use crate::encoding;
use crate::error::{Result, entropy_unavailable, malformed_key};
use crate::hash::message_digest;
use crate::public::VerifyingKey;
use crate::signature::Signature;
use crate::types::{Bit, Nonce, SecretValue, Table, empty_table};
use crate::util::{copy_exact, select};
use core::fmt;
use rand_core::CryptoRngCore;
use subtle::{Choice, ConstantTimeEq};
use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// A Lamport-Diffie one-time signing key.
///
/// The key holds 512 random secrets, two per digest bit. A signature reveals
/// one secret of every pair, so a second signature under the same key would
/// let an observer combine both halves and forge. Signing therefore takes the
/// key by value, and the secrets are zeroized when the key is dropped. The
/// type is deliberately not `Clone`.
///
/// Use [`SharedSigningKey`](crate::SharedSigningKey) when the key must be
/// reachable from several places at once.
pub struct SigningKey {
    pub(crate) tables: Box<Table>,
}

impl SigningKey {
    /// Generates a fresh key from a cryptographic random number generator.
    ///
    /// Fails with [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable)
    /// if `rng` cannot produce output.
    pub fn generate(rng: &mut impl CryptoRngCore) -> Result<Self> {
        // partially filled tables are zeroized on the error path by Drop
        let mut key = Self {
            tables: empty_table(),
        };
        for value in key.tables.iter_mut().flatten() {
            rng.try_fill_bytes(value).map_err(entropy_unavailable)?;
        }
        trace!("generated signing key");
        Ok(key)
    }

    /// Builds a key from its bit-0 and bit-1 tables.
    ///
    /// Each table must contain exactly 256 values of 32 bytes.
    pub fn from_tables<V: AsRef<[u8]>>(bit0: &[V], bit1: &[V]) -> Result<Self> {
        let mut key = Self {
            tables: empty_table(),
        };
        let [zero, one] = &mut *key.tables;
        copy_exact(zero, bit0).map_err(malformed_key)?;
        copy_exact(one, bit1).map_err(malformed_key)?;
        Ok(key)
    }

    /// Returns the secret at position `index` of the `bit` table
    pub fn value(&self, bit: Bit, index: usize) -> Option<&SecretValue> {
        self.tables[bit.index()].get(index)
    }

    /// Returns the whole `bit` table
    pub fn table(&self, bit: Bit) -> &[SecretValue] {
        &self.tables[bit.index()]
    }

    /// Derives the matching [`VerifyingKey`]
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey::from(self)
    }

    /// Serializes the key as 256 records of `table[0][i] || table[1][i]`
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(encoding::tables_to_bytes(&self.tables))
    }

    /// Signs `msg` with a nonce drawn from the operating system, consuming the key.
    #[cfg(feature = "os_rng")]
    pub fn sign(self, msg: &[u8]) -> Result<Signature> {
        self.sign_with_rng(&mut rand_core::OsRng, msg)
    }

    /// Signs `msg` with a nonce drawn from `rng`, consuming the key.
    pub fn sign_with_rng(self, rng: &mut impl CryptoRngCore, msg: &[u8]) -> Result<Signature> {
        let nonce = draw_nonce(rng)?;
        Ok(self.sign_with_nonce(&nonce, msg))
    }

    /// Reveals `table[bit_i][i]` for every bit `i` of `SHA-256(nonce || msg)`.
    pub(crate) fn sign_with_nonce(self, nonce: &Nonce, msg: &[u8]) -> Signature {
        let digest = message_digest(nonce, msg);
        let mut elements = Box::new([[0u8; N]; SIGNATURE_LEN]);
        elements[0] = *nonce;
        for (slot, secret) in elements[1..].iter_mut().zip(select(&digest, &self.tables)) {
            *slot = *secret;
        }
        trace!("signed message with one-time key");
        Signature::new(elements)
    }
}

pub(crate) fn draw_nonce(rng: &mut impl CryptoRngCore) -> Result<Nonce> {
    let mut nonce = [0u8; N];
    rng.try_fill_bytes(&mut nonce).map_err(entropy_unavailable)?;
    Ok(nonce)
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("tables", &"[REDACTED]")
            .finish()
    }
}

impl Zeroize for SigningKey {
    fn zeroize(&mut self) {
        for value in self.tables.iter_mut().flatten() {
            value.zeroize();
        }
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SigningKey {}

impl ConstantTimeEq for SigningKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.tables
            .iter()
            .flatten()
            .zip(other.tables.iter().flatten())
            .fold(Choice::from(1), |acc, (a, b)| acc & a[..].ct_eq(&b[..]))
    }
}

impl PartialEq for SigningKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SigningKey {}

/// Parses a [`SigningKey`] from its flat record encoding
impl TryFrom<&[u8]> for SigningKey {
    type Error = crate::Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let mut key = Self {
            tables: empty_table(),
        };
        encoding::tables_from_bytes(&mut key.tables, bytes).map_err(malformed_key)?;
        Ok(key)
    }
}
