//! src/encryptor/stream.rs
//! Windowed counter-mode encryption with running MAC.

use crate::crypto::hmac::StreamingMac;
use crate::crypto::keystream::AesCtr;
use crate::error::CodecError;
use crate::sink::Sink;
use crate::source::ByteSource;
use tracing::trace;

/// Encrypt the source window by window and push each ciphertext window to `sink`.
///
/// `window[..filled]` must already hold the plaintext read at offset 0. The
/// keystream is never reset between windows, and the MAC absorbs ciphertext,
/// not plaintext. Returns the total payload length.
///
/// A fill count larger than `window` is rejected with
/// [`CodecError::InvalidParameters`].
#[inline(always)]
pub fn encrypt_windows<S, K>(
    source: &mut S,
    sink: &mut K,
    window: &mut [u8],
    mut filled: usize,
    keystream: &mut AesCtr,
    mac: &mut StreamingMac,
) -> Result<u64, CodecError>
where
    S: ByteSource + ?Sized,
    K: Sink + ?Sized,
{
    let mut offset = 0u64;
    while filled > 0 {
        let capacity = window.len();
        let chunk = window.get_mut(..filled).ok_or_else(|| {
            CodecError::InvalidParameters(format!(
                "fill count {filled} exceeds window of {capacity} bytes"
            ))
        })?;
        keystream.apply_keystream(chunk);
        mac.update(chunk);
        sink.accept(chunk)?;
        trace!(offset, len = filled, "ciphertext window emitted");

        offset += filled as u64;
        filled = source.read_at(offset, window)?;
    }
    Ok(offset)
}
