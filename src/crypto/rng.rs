// src/crypto/rng.rs
//! OS-backed randomness for IVs and session keys.
//!
//! Every draw goes straight to `OsRng`; a failing source surfaces as
//! [`CodecError::System`] instead of silently producing weak bytes.

use crate::aliases::{Iv16, SecretBytes};
use crate::consts::{DEFAULT_KEY_SIZE, IV_SIZE};
use crate::error::CodecError;
use rand::{rngs::OsRng, TryRngCore};
use zeroize::Zeroizing;

/// Fill `dest` from the operating system CSPRNG.
#[inline]
pub fn fill_random(dest: &mut [u8]) -> Result<(), CodecError> {
    OsRng
        .try_fill_bytes(dest)
        .map_err(|e| CodecError::System(format!("random source unavailable: {e}")))
}

/// Generate `size` random bytes suitable for use as an AES or MAC key.
pub fn generate_key(size: usize) -> Result<SecretBytes, CodecError> {
    if size == 0 {
        return Err(CodecError::InvalidParameters("key size must be non-zero".into()));
    }
    let mut key = Zeroizing::new(vec![0u8; size]);
    fill_random(&mut key)?;
    Ok(key)
}

/// Fresh per-message IV.
pub fn generate_iv() -> Result<Iv16, CodecError> {
    let mut iv = Zeroizing::new([0u8; IV_SIZE]);
    fill_random(&mut iv[..])?;
    Ok(iv)
}

/// An independent AES key and MAC key for one encryption session.
///
/// Both keys are wiped when the pair is dropped. The codec never stores them.
#[derive(Clone)]
pub struct SessionKeys {
    aes_key: SecretBytes,
    mac_key: SecretBytes,
}

impl SessionKeys {
    /// Generate a pair with explicit lengths. `aes_len` must be 16, 24 or 32
    /// for the pair to be usable with the codec.
    pub fn generate(aes_len: usize, mac_len: usize) -> Result<Self, CodecError> {
        Ok(Self {
            aes_key: generate_key(aes_len)?,
            mac_key: generate_key(mac_len)?,
        })
    }

    /// AES-256 key plus a 32-byte MAC key.
    pub fn generate_default() -> Result<Self, CodecError> {
        Self::generate(DEFAULT_KEY_SIZE, DEFAULT_KEY_SIZE)
    }

    /// Wrap caller-supplied key material.
    pub fn from_parts(aes_key: Vec<u8>, mac_key: Vec<u8>) -> Self {
        Self {
            aes_key: Zeroizing::new(aes_key),
            mac_key: Zeroizing::new(mac_key),
        }
    }

    #[must_use]
    pub fn aes_key(&self) -> &[u8] {
        &self.aes_key
    }

    #[must_use]
    pub fn mac_key(&self) -> &[u8] {
        &self.mac_key
    }
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKeys")
            .field("aes_key_len", &self.aes_key.len())
            .field("mac_key_len", &self.mac_key.len())
            .finish()
    }
}
