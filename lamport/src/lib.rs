//! Lamport-Diffie one-time signatures (LD-OTS) in Rust
//!
//! A hash-based signature scheme built from SHA-256 alone. A [`SigningKey`]
//! holds two tables of 256 random 32-byte secrets; its [`VerifyingKey`] holds
//! their hashes. Signing hashes a fresh nonce together with the message and,
//! for each of the 256 digest bits, reveals the secret from the table that bit
//! selects.
//!
//! Each signing key must sign **at most one** message. Signing takes the key
//! by value, so the compiler rejects a second use; [`SharedSigningKey`]
//! enforces the same rule at runtime for keys reached through a shared
//! reference.
//!
//! # Usage
//!
#![cfg_attr(feature = "os_rng", doc = "```")]
#![cfg_attr(not(feature = "os_rng"), doc = "```ignore")]
//! # fn main() -> Result<(), lamport_signature::Error> {
//! use lamport_signature::HexLines;
//!
//! let (signing_key, verifying_key) = lamport_signature::generate()?;
//! let signature = lamport_signature::sign(signing_key, b"hello")?;
//!
//! let lines = signature.to_hex_lines();
//! assert_eq!(lines.lines().count(), 257);
//!
//! let parsed: Vec<Vec<u8>> = lines.lines().map(|line| hex::decode(line).unwrap()).collect();
//! assert!(lamport_signature::verify(&verifying_key, b"hello", &parsed)?);
//! assert!(!lamport_signature::verify(&verifying_key, b"hellp", &parsed)?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod constants;
mod encoding;
mod error;
mod hash;
mod keypair;
mod private;
mod public;
mod shared;
mod signature;
mod types;
mod util;

pub use encoding::HexLines;
pub use error::{Error, Result, ShapeError};
pub use keypair::KeyPair;
pub use private::SigningKey;
pub use public::VerifyingKey;
pub use shared::SharedSigningKey;
pub use signature::Signature;
pub use types::{Bit, HashValue, Nonce, SecretValue};

/// Generates a key pair from the operating system's random number generator.
#[cfg(feature = "os_rng")]
pub fn generate() -> Result<(SigningKey, VerifyingKey)> {
    KeyPair::generate(&mut rand_core::OsRng).map(KeyPair::into_parts)
}

/// Signs `message`, consuming `private` so it cannot sign again.
#[cfg(feature = "os_rng")]
pub fn sign(private: SigningKey, message: &[u8]) -> Result<Signature> {
    private.sign(message)
}

/// Checks `signature`, given as its 257 raw elements, against `message`.
///
/// Returns `Ok(false)` for a well-formed signature that does not verify, and
/// [`Error::MalformedSignature`] if the elements do not have the 257 x 32-byte
/// shape.
pub fn verify<V: AsRef<[u8]>>(
    public: &VerifyingKey,
    message: &[u8],
    signature: &[V],
) -> Result<bool> {
    let signature = Signature::from_elements(signature)?;
    Ok(public.is_valid(message, &signature))
}
