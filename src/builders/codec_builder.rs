//! src/builders/codec_builder.rs
//! Codec configuration builder.
//!
//! The window size only affects memory use and chunking; containers produced
//! with one window size decode with any other.

use crate::consts::WINDOW_SIZE;
use crate::decryptor::decode::{decode_to_vec_with_window, decode_with_window};
use crate::encryptor::encode::{encode_to_vec_with_window, encode_with_window};
use crate::error::CodecError;
use crate::sink::Sink;
use crate::source::ByteSource;
use crate::utils::check_window_size;

/// Builder for a [`Codec`].
///
/// Defaults to the standard 16 KiB window.
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`). It holds no key material.
#[derive(Debug, Clone)]
pub struct CodecBuilder {
    window_size: usize,
}

impl CodecBuilder {
    /// Create builder with the standard window size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            window_size: WINDOW_SIZE,
        }
    }

    /// Set a custom window size, validated by [`build`](Self::build).
    #[must_use]
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Current window size
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Validate and freeze the configuration.
    ///
    /// The window must hold the 64-byte tag plus at least one payload byte and
    /// may not exceed [`MAX_WINDOW_SIZE`](crate::consts::MAX_WINDOW_SIZE).
    pub fn build(self) -> Result<Codec, CodecError> {
        check_window_size(self.window_size)?;
        Ok(Codec {
            window_size: self.window_size,
        })
    }
}

impl Default for CodecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A configured encoder/decoder. Cheap to copy; owns no primitive state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    window_size: usize,
}

impl Codec {
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Same as [`crate::encode`] with this codec's window size.
    pub fn encode<S, K>(&self, source: S, sink: K, aes_key: &[u8], mac_key: &[u8]) -> Result<(), CodecError>
    where
        S: ByteSource,
        K: Sink,
    {
        encode_with_window(source, sink, aes_key, mac_key, self.window_size)
    }

    /// Same as [`crate::decode`] with this codec's window size.
    pub fn decode<S, K>(&self, source: S, sink: K, aes_key: &[u8], mac_key: &[u8]) -> Result<(), CodecError>
    where
        S: ByteSource,
        K: Sink,
    {
        decode_with_window(source, sink, aes_key, mac_key, self.window_size)
    }

    pub fn encode_to_vec(&self, plaintext: &[u8], aes_key: &[u8], mac_key: &[u8]) -> Result<Vec<u8>, CodecError> {
        encode_to_vec_with_window(plaintext, aes_key, mac_key, self.window_size)
    }

    pub fn decode_to_vec(&self, container: &[u8], aes_key: &[u8], mac_key: &[u8]) -> Result<Vec<u8>, CodecError> {
        decode_to_vec_with_window(container, aes_key, mac_key, self.window_size)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
        }
    }
}
