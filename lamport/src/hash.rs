//! SHA-256 helpers

use crate::types::{HashValue, Nonce};
use digest::Digest;
use sha2::Sha256;

/// `SHA-256(value)`
pub(crate) fn hash(value: &[u8]) -> HashValue {
    let mut out = [0u8; crate::constants::N];
    out.copy_from_slice(&Sha256::digest(value));
    out
}

/// `SHA-256(nonce || msg)`, the digest whose bits select the revealed secrets
pub(crate) fn message_digest(nonce: &Nonce, msg: &[u8]) -> HashValue {
    let mut out = [0u8; crate::constants::N];
    let digest = Sha256::new()
        .chain_update(nonce)
        .chain_update(msg)
        .finalize();
    out.copy_from_slice(&digest);
    out
}
