//! Contains the [`SharedSigningKey`] type

use crate::error::{Error, Result};
use crate::private::{SigningKey, draw_nonce};
use crate::public::VerifyingKey;
use crate::signature::Signature;
use ::signature::{Keypair, RandomizedSigner, rand_core::CryptoRngCore};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// A [`SigningKey`] that can be shared by reference while still signing at most once.
///
/// The key sits in a mutex-guarded slot. Signing takes it out of the slot under
/// the lock, so among any number of concurrent callers exactly one signs and
/// every other caller gets [`Error::KeyAlreadyUsed`]. The verifying key is
/// derived up front and stays available after the signing key is gone.
#[derive(Debug)]
pub struct SharedSigningKey {
    slot: Mutex<Option<SigningKey>>,
    verifying_key: VerifyingKey,
}

impl SharedSigningKey {
    /// Wraps an unused signing key
    pub fn new(signing_key: SigningKey) -> Self {
        Self {
            verifying_key: signing_key.verifying_key(),
            slot: Mutex::new(Some(signing_key)),
        }
    }

    /// Returns `true` once the key has produced its signature
    pub fn is_used(&self) -> bool {
        self.lock().is_none()
    }

    /// Signs `msg` with a nonce drawn from the operating system.
    ///
    /// Fails with [`Error::KeyAlreadyUsed`] on every call after the first successful one.
    #[cfg(feature = "os_rng")]
    pub fn sign_once(&self, msg: &[u8]) -> Result<Signature> {
        self.sign_once_with_rng(&mut rand_core::OsRng, msg)
    }

    /// Signs `msg` with a nonce drawn from `rng`.
    ///
    /// The nonce is drawn before the key is taken, so a failing `rng` leaves the
    /// key unused.
    pub fn sign_once_with_rng(&self, rng: &mut impl CryptoRngCore, msg: &[u8]) -> Result<Signature> {
        let nonce = draw_nonce(rng)?;
        let signing_key = self.take()?;
        Ok(signing_key.sign_with_nonce(&nonce, msg))
    }

    fn take(&self) -> Result<SigningKey> {
        self.lock().take().ok_or_else(|| {
            warn!("refused to sign twice with a one-time key");
            Error::KeyAlreadyUsed
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<SigningKey>> {
        // the slot holds no invariant a panicking holder could break
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<SigningKey> for SharedSigningKey {
    fn from(signing_key: SigningKey) -> Self {
        Self::new(signing_key)
    }
}

impl Keypair for SharedSigningKey {
    type VerifyingKey = VerifyingKey;

    fn verifying_key(&self) -> Self::VerifyingKey {
        self.verifying_key.clone()
    }
}

#[cfg(feature = "os_rng")]
impl ::signature::Signer<Signature> for SharedSigningKey {
    fn try_sign(&self, msg: &[u8]) -> core::result::Result<Signature, ::signature::Error> {
        self.sign_once(msg).map_err(::signature::Error::from_source)
    }
}

impl RandomizedSigner<Signature> for SharedSigningKey {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
    ) -> core::result::Result<Signature, ::signature::Error> {
        self.sign_once_with_rng(rng, msg)
            .map_err(::signature::Error::from_source)
    }
}
