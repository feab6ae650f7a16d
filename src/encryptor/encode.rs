//! src/encryptor/encode.rs
//! Container encoding: `version ‖ iv ‖ ciphertext ‖ tag`.

use crate::aliases::WindowBuffer;
use crate::consts::WINDOW_SIZE;
use crate::crypto::check_key_material;
use crate::crypto::hmac::StreamingMac;
use crate::crypto::keystream::AesCtr;
use crate::crypto::rng::generate_iv;
use crate::encryptor::stream::encrypt_windows;
use crate::encryptor::write::{write_iv, write_tag, write_version};
use crate::error::CodecError;
use crate::header::container_len;
use crate::sink::Sink;
use crate::source::ByteSource;
use tracing::debug;
use zeroize::Zeroizing;

/// Encrypt and authenticate `source`, pushing the container to `sink`.
///
/// The sink receives, in order: the version byte, the 16-byte IV, one chunk
/// per ciphertext window, and the 64-byte tag. A fresh random IV is drawn for
/// every call.
///
/// # Errors
///
/// - [`CodecError::InvalidParameters`] for an empty source or empty keys
/// - [`CodecError::System`] if the random source fails or the AES key length is not 16, 24 or 32
/// - any error raised by the source or the sink, unchanged
///
/// # Example
///
/// ```
/// use aesctr_stream::{decode, encode, SessionKeys};
///
/// let keys = SessionKeys::generate_default()?;
/// let mut container = Vec::new();
/// encode(&b"attack at dawn"[..], &mut container, keys.aes_key(), keys.mac_key())?;
/// assert_eq!(container.len(), 1 + 16 + 14 + 64);
///
/// let mut plaintext = Vec::new();
/// decode(container.as_slice(), &mut plaintext, keys.aes_key(), keys.mac_key())?;
/// assert_eq!(plaintext, b"attack at dawn");
/// # Ok::<(), aesctr_stream::CodecError>(())
/// ```
pub fn encode<S, K>(source: S, sink: K, aes_key: &[u8], mac_key: &[u8]) -> Result<(), CodecError>
where
    S: ByteSource,
    K: Sink,
{
    encode_with_window(source, sink, aes_key, mac_key, WINDOW_SIZE)
}

pub(crate) fn encode_with_window<S, K>(
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
    check_key_material(aes_key, mac_key)?;

    // Peek the first window so an empty source is rejected before anything is emitted.
    let mut window: WindowBuffer = Zeroizing::new(vec![0u8; window_size]);
    let filled = source.read_at(0, &mut window)?;
    if filled == 0 {
        return Err(CodecError::InvalidParameters("empty input".into()));
    }

    let iv = generate_iv()?;
    let mut keystream = AesCtr::new(aes_key, &iv)?;
    let mut mac = StreamingMac::new(mac_key)?;
    debug!(window_size, "encoding stream");

    write_version(&mut sink)?;
    mac.update(&iv[..]);
    write_iv(&mut sink, &iv)?;

    let payload_len = encrypt_windows(
        &mut source,
        &mut sink,
        &mut window,
        filled,
        &mut keystream,
        &mut mac,
    )?;

    write_tag(&mut sink, &mac.finalize())?;
    debug!(
        payload_len,
        container_len = container_len(payload_len),
        "stream encoded"
    );
    Ok(())
}

/// Encode an in-memory plaintext into a freshly allocated container.
pub fn encode_to_vec(plaintext: &[u8], aes_key: &[u8], mac_key: &[u8]) -> Result<Vec<u8>, CodecError> {
    encode_to_vec_with_window(plaintext, aes_key, mac_key, WINDOW_SIZE)
}

pub(crate) fn encode_to_vec_with_window(
    plaintext: &[u8],
    aes_key: &[u8],
    mac_key: &[u8],
    window_size: usize,
) -> Result<Vec<u8>, CodecError> {
    let mut container = Vec::with_capacity(container_len(plaintext.len() as u64) as usize);
    encode_with_window(plaintext, &mut container, aes_key, mac_key, window_size)?;
    Ok(container)
}
