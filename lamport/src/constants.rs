//! Scheme parameters for LD-OTS over SHA-256

use digest::OutputSizeUser;
use sha2::Sha256;
use static_assertions::const_assert_eq;
use typenum::Unsigned;

/// Length in bytes of every secret value, public value and nonce
pub const N: usize = 32;

/// Number of digest bits signed, which is also the number of positions per key table
pub const NUM_BITS: usize = 8 * N;

/// Number of 32-byte elements in a signature: the nonce followed by one revealed secret per bit
pub const SIGNATURE_LEN: usize = NUM_BITS + 1;

/// Length in bytes of one key record: `table[0][i] || table[1][i]`
pub const KEY_RECORD_LEN: usize = 2 * N;

/// Length in bytes of the flat key encoding
pub const KEY_BYTES: usize = NUM_BITS * KEY_RECORD_LEN;

/// Length in bytes of the flat signature encoding
pub const SIGNATURE_BYTES: usize = SIGNATURE_LEN * N;

// one table position per digest bit, one hash output per secret value
const_assert_eq!(<Sha256 as OutputSizeUser>::OutputSize::USIZE, N);
const_assert_eq!(NUM_BITS, 256);
const_assert_eq!(SIGNATURE_BYTES, 8224);
