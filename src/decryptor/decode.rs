//! src/decryptor/decode.rs
//! Container decoding with deferred, whole-stream authentication.

use crate::consts::{CONTAINER_OVERHEAD, WINDOW_SIZE};
use crate::crypto::check_key_material;
use crate::crypto::hmac::StreamingMac;
use crate::crypto::keystream::AesCtr;
use crate::decryptor::read::{read_format_version, read_iv};
use crate::decryptor::stream::{verify_trailer, DecryptionContext};
use crate::error::CodecError;
use crate::sink::Sink;
use crate::source::ByteSource;
use tracing::debug;
use zeroize::Zeroizing;

/// Decrypt and verify a container read from `source`, pushing plaintext to `sink`.
///
/// Plaintext is emitted window by window **before** the tag is checked. Nothing
/// the sink received may be trusted unless this call returns `Ok(())`; on any
/// error the caller must discard it.
///
/// # Errors
///
/// - [`CodecError::TruncatedInput`] if the version, IV or a full 64-byte tag is missing
/// - [`CodecError::UnsupportedVersion`] if the first byte is not `0x01` (checked before any key is used)
/// - [`CodecError::InvalidParameters`] for empty keys
/// - [`CodecError::System`] for an AES key that is not 16, 24 or 32 bytes
/// - [`CodecError::InvalidAuthentication`] if the tag does not match
/// - any error raised by the source or the sink, unchanged
pub fn decode<S, K>(source: S, sink: K, aes_key: &[u8], mac_key: &[u8]) -> Result<(), CodecError>
where
    S: ByteSource,
    K: Sink,
{
    decode_with_window(source, sink, aes_key, mac_key, WINDOW_SIZE)
}

pub(crate) fn decode_with_window<S, K>(
    mut source: S,
    mut sink: K,
    aes_key: &[u8],
    mac_key: &[u8],
    window_size: usize,
) -> Result<(), CodecError>
where
    S: ByteSource,
    K: Sink,
{
    let version = read_format_version(&mut source)?;
    check_key_material(aes_key, mac_key)?;
    let iv = read_iv(&mut source)?;
    debug!(version, window_size, "decoding stream");

    let mut keystream = AesCtr::new(aes_key, &iv)?;
    let mut mac = StreamingMac::new(mac_key)?;
    mac.update(&iv[..]);

    let mut ctx = DecryptionContext::new(window_size)?;
    ctx.decrypt_windows(&mut source, &mut sink, &mut keystream, &mut mac)?;
    verify_trailer(mac, &ctx)?;

    debug!(payload_len = ctx.payload_len(), "stream decoded and authenticated");
    Ok(())
}

/// Decode an in-memory container and return the plaintext only if it authenticates.
///
/// On failure the partially decrypted buffer is wiped before the error is returned.
pub fn decode_to_vec(container: &[u8], aes_key: &[u8], mac_key: &[u8]) -> Result<Vec<u8>, CodecError> {
    decode_to_vec_with_window(container, aes_key, mac_key, WINDOW_SIZE)
}

pub(crate) fn decode_to_vec_with_window(
    container: &[u8],
    aes_key: &[u8],
    mac_key: &[u8],
    window_size: usize,
) -> Result<Vec<u8>, CodecError> {
    let capacity = container.len().saturating_sub(CONTAINER_OVERHEAD);
    let mut plaintext = Zeroizing::new(Vec::with_capacity(capacity));
    decode_with_window(container, &mut *plaintext, aes_key, mac_key, window_size)?;
    Ok(std::mem::take(&mut *plaintext))
}
