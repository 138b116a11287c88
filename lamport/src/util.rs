//! Bit decomposition and shape checks

use crate::constants::N;
use crate::error::ShapeError;
use crate::types::{Bit, HashValue, Table};
use core::cmp::Ordering;

/// Returns an iterator over the bits of `bytes`, most significant bit of each byte first.
///
/// Bit `i` of the output is bit `i % 8` (counting from the MSB) of byte `i / 8`.
pub(crate) fn bits<'a>(bytes: impl IntoIterator<Item = &'a u8>) -> impl Iterator<Item = Bit> {
    bytes
        .into_iter()
        .copied()
        .flat_map(|byte| (0..8).map(move |k| Bit::from((byte >> (7 - k)) & 1 == 1)))
}

/// Returns `table[bit_i][i]` for every bit position `i` of `digest`, in increasing `i`.
///
/// Signing uses this to pick the secrets to reveal and verification uses it to
/// pick the public values to compare against, so both sides agree on the
/// position-to-bit mapping.
pub(crate) fn select<'a>(
    digest: &'a HashValue,
    table: &'a Table,
) -> impl Iterator<Item = &'a [u8; N]> {
    bits(digest)
        .enumerate()
        .map(move |(i, bit)| &table[bit.index()][i])
}

/// Checks that exactly `expected` entries are present.
pub(crate) fn check_count(expected: usize, got: usize) -> Result<(), ShapeError> {
    match got.cmp(&expected) {
        Ordering::Less => Err(ShapeError::TooFewEntries { expected, got }),
        Ordering::Greater => Err(ShapeError::TooManyEntries { expected, got }),
        Ordering::Equal => Ok(()),
    }
}

/// Copies `values` into `dst`, requiring exactly `dst.len()` values of `N` bytes each.
pub(crate) fn copy_exact<V: AsRef<[u8]>>(
    dst: &mut [[u8; N]],
    values: &[V],
) -> Result<(), ShapeError> {
    check_count(dst.len(), values.len())?;
    for (index, (slot, value)) in dst.iter_mut().zip(values).enumerate() {
        let value = value.as_ref();
        if value.len() != N {
            return Err(ShapeError::WrongLength {
                index,
                expected: N,
                got: value.len(),
            });
        }
        slot.copy_from_slice(value);
    }
    Ok(())
}
