//! Byte and hex-line encodings of keys and signatures.
//!
//! A key is 256 records, one per digest bit position `i`, each record being the
//! 64 bytes `table[0][i] || table[1][i]`. The flat byte form concatenates the
//! records; the line form writes one lowercase hex record per line.
//!
//! A signature is 257 values of 32 bytes, the nonce first. The line form writes
//! one hex value per line.

use crate::constants::{KEY_RECORD_LEN, N, NUM_BITS};
use crate::error::{Result, ShapeError, malformed_key, malformed_signature};
use crate::private::SigningKey;
use crate::public::VerifyingKey;
use crate::signature::Signature;
use crate::types::{Table, empty_table};
use crate::util::check_count;
use zeroize::Zeroizing;

/// Conversion to and from the newline-separated hex interchange format.
pub trait HexLines: Sized {
    /// Encodes `self` as lowercase hex, one value per line, every line ending in `\n`.
    ///
    /// # Security
    ///
    /// The text of a [`SigningKey`] holds every secret in the clear. The
    /// returned buffer is zeroized on drop, but copies made from it are not.
    fn to_hex_lines(&self) -> Zeroizing<String>;

    /// Decodes the line format, rejecting anything that does not have the exact
    /// expected number of lines and bytes per line.
    ///
    /// `\n` and `\r\n` line endings and hex digits of either case are accepted.
    fn from_hex_lines(text: &str) -> Result<Self>;
}

impl HexLines for SigningKey {
    fn to_hex_lines(&self) -> Zeroizing<String> {
        tables_to_hex_lines(&self.tables)
    }

    fn from_hex_lines(text: &str) -> Result<Self> {
        let records = decode_lines(text).map_err(malformed_key)?;
        let mut key = SigningKey {
            tables: empty_table(),
        };
        tables_from_records(&mut key.tables, records.as_slice()).map_err(malformed_key)?;
        Ok(key)
    }
}

impl HexLines for VerifyingKey {
    fn to_hex_lines(&self) -> Zeroizing<String> {
        tables_to_hex_lines(&self.tables)
    }

    fn from_hex_lines(text: &str) -> Result<Self> {
        let records = decode_lines(text).map_err(malformed_key)?;
        let mut tables = empty_table();
        tables_from_records(&mut tables, records.as_slice()).map_err(malformed_key)?;
        Ok(VerifyingKey { tables })
    }
}

impl HexLines for Signature {
    fn to_hex_lines(&self) -> Zeroizing<String> {
        let mut out = Zeroizing::new(String::with_capacity(self.elements().len() * (2 * N + 1)));
        for element in self.elements() {
            push_hex(&mut out, element);
            out.push('\n');
        }
        out
    }

    fn from_hex_lines(text: &str) -> Result<Self> {
        let elements = decode_lines(text).map_err(malformed_signature)?;
        Signature::from_elements(elements.as_slice())
    }
}

/// Decodes every line into its own buffer; all of them are zeroized on drop,
/// including the lines already decoded when a later line fails.
fn decode_lines(text: &str) -> core::result::Result<Zeroizing<Vec<Vec<u8>>>, ShapeError> {
    let mut records = Zeroizing::new(Vec::new());
    for (line, hex_line) in text.lines().enumerate() {
        records.push(vec![0u8; hex_line.len() / 2]);
        let record = records.last_mut().ok_or(ShapeError::InvalidHex { line })?;
        hex::decode_to_slice(hex_line, record).map_err(|_| ShapeError::InvalidHex { line })?;
    }
    Ok(records)
}

/// Appends the lowercase hex of `value` through a zeroized buffer.
fn push_hex(out: &mut String, value: &[u8; N]) {
    let mut buf = Zeroizing::new([0u8; 2 * N]);
    // the buffer is exactly twice the input length
    if hex::encode_to_slice(value, &mut buf[..]).is_ok() {
        out.extend(buf.iter().map(|&digit| char::from(digit)));
    }
}

fn tables_to_hex_lines(tables: &Table) -> Zeroizing<String> {
    let mut out = Zeroizing::new(String::with_capacity(NUM_BITS * (2 * KEY_RECORD_LEN + 1)));
    for (zero, one) in tables[0].iter().zip(&tables[1]) {
        push_hex(&mut out, zero);
        push_hex(&mut out, one);
        out.push('\n');
    }
    out
}

pub(crate) fn tables_to_bytes(tables: &Table) -> Vec<u8> {
    let mut out = Vec::with_capacity(NUM_BITS * KEY_RECORD_LEN);
    for (zero, one) in tables[0].iter().zip(&tables[1]) {
        out.extend_from_slice(zero);
        out.extend_from_slice(one);
    }
    out
}

pub(crate) fn tables_from_bytes(
    tables: &mut Table,
    bytes: &[u8],
) -> core::result::Result<(), ShapeError> {
    let records: Vec<&[u8]> = bytes.chunks(KEY_RECORD_LEN).collect();
    tables_from_records(tables, &records)
}

/// Splits each 64-byte record `i` into `tables[0][i]` and `tables[1][i]`.
fn tables_from_records<V: AsRef<[u8]>>(
    tables: &mut Table,
    records: &[V],
) -> core::result::Result<(), ShapeError> {
    check_count(NUM_BITS, records.len())?;
    for (index, record) in records.iter().enumerate() {
        let record = record.as_ref();
        if record.len() != KEY_RECORD_LEN {
            return Err(ShapeError::WrongLength {
                index,
                expected: KEY_RECORD_LEN,
                got: record.len(),
            });
        }
        let (zero, one) = record.split_at(N);
        tables[0][index].copy_from_slice(zero);
        tables[1][index].copy_from_slice(one);
    }
    Ok(())
}
