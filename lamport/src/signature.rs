//! Contains the [`Signature`] type

use crate::constants::{N, SIGNATURE_LEN};
use crate::error::{Result, malformed_signature};
use crate::types::{Nonce, SecretValue};
use crate::util::copy_exact;
use ::signature::SignatureEncoding;
use core::fmt;

/// Opaque struct representing a Lamport-Diffie signature.
///
/// Element 0 is the 32-byte nonce `r`; elements 1 through 256 are the secrets
/// revealed for bits 0 through 255 of `SHA-256(r || msg)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    elements: Box<[[u8; N]; SIGNATURE_LEN]>,
}

impl Signature {
    pub(crate) fn new(elements: Box<[[u8; N]; SIGNATURE_LEN]>) -> Self {
        Self { elements }
    }

    /// Builds a signature from its 257 elements, rejecting any other count and
    /// any element that is not exactly 32 bytes long.
    pub fn from_elements<V: AsRef<[u8]>>(elements: &[V]) -> Result<Self> {
        let mut parsed = Box::new([[0u8; N]; SIGNATURE_LEN]);
        copy_exact(&mut parsed[..], elements).map_err(malformed_signature)?;
        Ok(Self::new(parsed))
    }

    /// Returns the nonce hashed in front of the message
    pub fn nonce(&self) -> &Nonce {
        &self.elements[0]
    }

    /// Returns the 256 revealed secrets in bit order
    pub fn revealed(&self) -> &[SecretValue] {
        &self.elements[1..]
    }

    /// Returns all 257 elements, the nonce first
    pub fn elements(&self) -> &[[u8; N]] {
        &self.elements[..]
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("nonce", &hex::encode(self.nonce()))
            .finish_non_exhaustive()
    }
}

impl SignatureEncoding for Signature {
    type Repr = Vec<u8>;
}

/// Flattens a [`Signature`] into `r || revealed[0] || ... || revealed[255]`
impl From<Signature> for Vec<u8> {
    fn from(sig: Signature) -> Self {
        sig.elements.concat()
    }
}

/// Tries to parse a [`Signature`] from an exact slice
impl TryFrom<&[u8]> for Signature {
    type Error = crate::Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let elements: Vec<&[u8]> = bytes.chunks(N).collect();
        Self::from_elements(&elements)
    }
}

#[cfg(test)]
mod tests {
    use super::Signature;
    use crate::constants::{N, SIGNATURE_BYTES, SIGNATURE_LEN};
    use crate::error::{Error, ShapeError};
    use ::signature::SignatureEncoding;

    fn elements(count: usize) -> Vec<Vec<u8>> {
        (0..count).map(|i| vec![i as u8; N]).collect()
    }

    #[test]
    fn from_elements_shape() {
        let sig = Signature::from_elements(&elements(SIGNATURE_LEN)).unwrap();
        assert_eq!(sig.nonce(), &[0u8; N]);
        assert_eq!(sig.revealed().len(), SIGNATURE_LEN - 1);
        assert_eq!(sig.revealed()[0], [1u8; N]);

        assert_eq!(
            Signature::from_elements(&elements(SIGNATURE_LEN - 1)).unwrap_err(),
            Error::MalformedSignature(ShapeError::TooFewEntries {
                expected: SIGNATURE_LEN,
                got: SIGNATURE_LEN - 1
            })
        );
        assert_eq!(
            Signature::from_elements(&elements(SIGNATURE_LEN + 1)).unwrap_err(),
            Error::MalformedSignature(ShapeError::TooManyEntries {
                expected: SIGNATURE_LEN,
                got: SIGNATURE_LEN + 1
            })
        );

        let mut short_nonce = elements(SIGNATURE_LEN);
        short_nonce[0].truncate(16);
        assert_eq!(
            Signature::from_elements(&short_nonce).unwrap_err(),
            Error::MalformedSignature(ShapeError::WrongLength {
                index: 0,
                expected: N,
                got: 16
            })
        );
    }

    #[test]
    fn flat_encoding() {
        let sig = Signature::from_elements(&elements(SIGNATURE_LEN)).unwrap();
        let bytes = sig.to_vec();
        assert_eq!(bytes.len(), SIGNATURE_BYTES);
        assert_eq!(&bytes[..N], &[0u8; N]);
        assert_eq!(&bytes[SIGNATURE_BYTES - N..], &[0u8; N]); // 256 as u8

        assert_eq!(Signature::try_from(&bytes[..]).unwrap(), sig);
        assert_eq!(
            Signature::try_from(&bytes[..SIGNATURE_BYTES - 1]).unwrap_err(),
            Error::MalformedSignature(ShapeError::WrongLength {
                index: SIGNATURE_LEN - 1,
                expected: N,
                got: N - 1
            })
        );
    }
}
