//! All types shared between keys and signatures

use crate::constants::{N, NUM_BITS};

/// A 32-byte hash preimage held in a signing key and revealed by a signature.
pub type SecretValue = [u8; N];

/// The 32-byte random value hashed in front of the message when signing.
pub type Nonce = [u8; N];

/// A SHA-256 output.
pub type HashValue = [u8; N];

/// Both tables of a key: `table[bit][i]` is the entry for digest bit `i` taking value `bit`.
pub(crate) type Table = [[[u8; N]; NUM_BITS]; 2];

/// Selects one of the two key tables.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Bit {
    /// The table used where the digest bit is 0
    Zero = 0,
    /// The table used where the digest bit is 1
    One = 1,
}

impl Bit {
    /// Returns the table index, 0 or 1
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<bool> for Bit {
    fn from(bit: bool) -> Self {
        if bit { Self::One } else { Self::Zero }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit == Bit::One
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit as u8
    }
}

pub(crate) fn empty_table() -> Box<Table> {
    Box::new([[[0u8; N]; NUM_BITS]; 2])
}
