//! # Container Header
//!
//! Keyless inspection of a container: the version probe and the length
//! arithmetic of the fixed framing.
//!
//! ```text
//! offset 0      : version   (1 byte, 0x01)
//! offset 1      : IV        (16 bytes)
//! offset 17     : ciphertext (N bytes, N = plaintext length)
//! offset 17 + N : tag       (64 bytes, HMAC-SHA512 over IV ‖ ciphertext)
//! ```

use crate::consts::{CONTAINER_OVERHEAD, FORMAT_VERSION, VERSION_OFFSET};
use crate::decryptor::read_exact_span;
use crate::error::CodecError;
use crate::source::ByteSource;

/// Read the container's version byte without validating it or touching any key.
///
/// Useful for routing containers in batch tooling before committing to a
/// full decode.
///
/// # Errors
///
/// - [`CodecError::TruncatedInput`] if the source is empty
///
/// # Example
///
/// ```
/// use aesctr_stream::read_version;
///
/// assert_eq!(read_version(&b"\x01rest-of-container"[..])?, 1);
/// assert_eq!(read_version(&b"\x07"[..])?, 7);
/// # Ok::<(), aesctr_stream::CodecError>(())
/// ```
pub fn read_version<S: ByteSource>(mut source: S) -> Result<u8, CodecError> {
    let [version] = read_exact_span::<_, 1>(&mut source, VERSION_OFFSET, "version")?;
    Ok(version)
}

/// Whether this library can decode containers of `version`.
#[inline]
pub const fn is_supported_version(version: u8) -> bool {
    version == FORMAT_VERSION
}

/// Exact container length for a plaintext of `plaintext_len` bytes.
#[inline]
pub const fn container_len(plaintext_len: u64) -> u64 {
    plaintext_len + CONTAINER_OVERHEAD as u64
}

/// Plaintext length carried by a container of `container_len` bytes.
///
/// Returns `None` when the container is too short to hold the framing.
#[inline]
pub const fn plaintext_len(container_len: u64) -> Option<u64> {
    container_len.checked_sub(CONTAINER_OVERHEAD as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_returns_raw_byte() {
        for v in [0u8, 1, 2, 0xff] {
            assert_eq!(read_version(vec![v, 0, 0]).unwrap(), v);
        }
    }

    #[test]
    fn empty_container_is_truncated() {
        assert!(matches!(
            read_version(&b""[..]),
            Err(CodecError::TruncatedInput("version"))
        ));
    }

    #[test]
    fn length_arithmetic() {
        assert_eq!(container_len(5), 86);
        assert_eq!(plaintext_len(86), Some(5));
        assert_eq!(plaintext_len(81), Some(0));
        assert_eq!(plaintext_len(80), None);
        assert!(is_supported_version(1));
        assert!(!is_supported_version(0));
    }
}
