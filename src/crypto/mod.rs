// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! - [`keystream`] - AES counter-mode keystream
//! - [`hmac`] - streaming HMAC-SHA512 accumulator
//! - [`rng`] - OS randomness for keys and IVs

pub mod hmac;
pub mod keystream;
pub mod rng;

use crate::error::CodecError;

/// Reject empty key material before any primitive is built.
#[inline]
pub(crate) fn check_key_material(aes_key: &[u8], mac_key: &[u8]) -> Result<(), CodecError> {
    if aes_key.is_empty() {
        return Err(CodecError::InvalidParameters("empty AES key".into()));
    }
    if mac_key.is_empty() {
        return Err(CodecError::InvalidParameters("empty MAC key".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_keys_rejected() {
        assert!(matches!(
            check_key_material(&[], &[1]),
            Err(CodecError::InvalidParameters(_))
        ));
        assert!(matches!(
            check_key_material(&[1], &[]),
            Err(CodecError::InvalidParameters(_))
        ));
        assert!(check_key_material(&[1], &[1]).is_ok());
    }
}
