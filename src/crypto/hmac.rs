// src/crypto/hmac.rs

//! Streaming HMAC-SHA512 accumulator over `iv ‖ ciphertext`.

use crate::aliases::{HmacSha512, Tag64};
use crate::consts::TAG_SIZE;
use crate::error::CodecError;
use hmac::Mac;
use zeroize::Zeroizing;

pub struct StreamingMac {
    inner: HmacSha512,
}

impl StreamingMac {
    pub fn new(key: &[u8]) -> Result<Self, CodecError> {
        if key.is_empty() {
            return Err(CodecError::InvalidParameters("empty MAC key".into()));
        }
        let inner = <HmacSha512 as Mac>::new_from_slice(key)
            .map_err(|e| CodecError::System(format!("HMAC key setup: {e}")))?;
        Ok(Self { inner })
    }

    #[inline(always)]
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Consume the accumulator and return the 64-byte tag.
    pub fn finalize(self) -> Tag64 {
        let mut tag = Zeroizing::new([0u8; TAG_SIZE]);
        tag.copy_from_slice(self.inner.finalize().into_bytes().as_slice());
        tag
    }

    /// Constant-time comparison against a candidate tag.
    ///
    /// Any length other than 64 bytes fails.
    pub fn verify(self, candidate: &[u8]) -> Result<(), CodecError> {
        self.inner
            .verify_slice(candidate)
            .map_err(|_| CodecError::InvalidAuthentication)
    }
}
