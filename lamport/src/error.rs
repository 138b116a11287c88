//! Error types

use tracing::{debug, error};

/// Errors used throughout this crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The key does not have the 2 x 256 x 32-byte shape.
    #[error("malformed key: {0}")]
    MalformedKey(ShapeError),
    /// The signature does not have the 257 x 32-byte shape.
    #[error("malformed signature: {0}")]
    MalformedSignature(ShapeError),
    /// The random number generator failed to produce output.
    #[error("entropy source unavailable")]
    EntropyUnavailable,
    /// The one-time signing key has already produced its signature.
    #[error("signing key has already been used")]
    KeyAlreadyUsed,
}

/// Result type used by this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// The structural defect behind [`Error::MalformedKey`] and [`Error::MalformedSignature`]
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// Fewer entries than the format requires
    #[error("too few entries: expected {expected}, got {got}")]
    TooFewEntries {
        /// Required number of entries
        expected: usize,
        /// Number of entries found
        got: usize,
    },
    /// More entries than the format allows
    #[error("too many entries: expected {expected}, got {got}")]
    TooManyEntries {
        /// Required number of entries
        expected: usize,
        /// Number of entries found
        got: usize,
    },
    /// The entry at `index` has the wrong length in bytes
    #[error("entry {index} is {got} bytes long, expected {expected}")]
    WrongLength {
        /// Zero-based position of the offending entry
        index: usize,
        /// Required length in bytes
        expected: usize,
        /// Actual length in bytes
        got: usize,
    },
    /// The given zero-based line is not valid hex
    #[error("line {line} is not valid hex")]
    InvalidHex {
        /// Zero-based line number
        line: usize,
    },
}

pub(crate) fn malformed_key(defect: ShapeError) -> Error {
    debug!(%defect, "rejected malformed key");
    Error::MalformedKey(defect)
}

pub(crate) fn malformed_signature(defect: ShapeError) -> Error {
    debug!(%defect, "rejected malformed signature");
    Error::MalformedSignature(defect)
}

pub(crate) fn entropy_unavailable(err: rand_core::Error) -> Error {
    error!(%err, "random number generator failed");
    Error::EntropyUnavailable
}
