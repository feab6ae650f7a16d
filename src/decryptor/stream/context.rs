//! src/decryptor/stream/context.rs
//! Tail-deferral window loop.
//!
//! The last `TAG_SIZE` bytes of every window are withheld and re-read as the
//! head of the next window. Only a read that returns exactly `TAG_SIZE` bytes
//! classifies those bytes as the tag; everything before them has already been
//! authenticated and decrypted as ciphertext.

use crate::aliases::{Tag64, WindowBuffer};
use crate::consts::{HEADER_LEN, TAG_SIZE};
use crate::crypto::hmac::StreamingMac;
use crate::crypto::keystream::AesCtr;
use crate::error::CodecError;
use crate::sink::Sink;
use crate::source::ByteSource;
use crate::utils::check_window_size;
use tracing::trace;
use zeroize::Zeroizing;

pub struct DecryptionContext {
    window: WindowBuffer,
    offset: u64,
    payload_len: u64,
    tag: Tag64,
    tag_found: bool,
}

impl DecryptionContext {
    /// A window of `TAG_SIZE` bytes or less cannot tell payload from tag, so it
    /// is rejected with [`CodecError::InvalidParameters`].
    #[inline(always)]
    pub fn new(window_size: usize) -> Result<Self, CodecError> {
        check_window_size(window_size)?;
        Ok(Self {
            window: Zeroizing::new(vec![0u8; window_size]),
            offset: HEADER_LEN as u64,
            payload_len: 0,
            tag: Zeroizing::new([0u8; TAG_SIZE]),
            tag_found: false,
        })
    }

    /// Run the window loop until the tag is isolated.
    ///
    /// One read per window serves both the MAC update and the decryption.
    pub fn decrypt_windows<S, K>(
        &mut self,
        source: &mut S,
        sink: &mut K,
        keystream: &mut AesCtr,
        mac: &mut StreamingMac,
    ) -> Result<(), CodecError>
    where
        S: ByteSource + ?Sized,
        K: Sink + ?Sized,
    {
        loop {
            let read = source.read_at(self.offset, &mut self.window)?;
            if read < TAG_SIZE {
                return Err(CodecError::TruncatedInput("tag"));
            }

            let limit = read - TAG_SIZE;
            if limit == 0 {
                self.tag.copy_from_slice(&self.window[..TAG_SIZE]);
                self.tag_found = true;
                return Ok(());
            }

            let committed = &mut self.window[..limit];
            mac.update(committed);
            keystream.apply_keystream(committed);
            sink.accept(committed)?;
            trace!(offset = self.offset, len = limit, "plaintext window emitted");

            self.offset += limit as u64;
            self.payload_len += limit as u64;
        }
    }

    /// The isolated tag, once the loop has finished.
    #[inline(always)]
    pub fn tag(&self) -> Option<&[u8]> {
        self.tag_found.then_some(&self.tag[..])
    }

    /// Ciphertext bytes committed so far.
    #[inline(always)]
    pub fn payload_len(&self) -> u64 {
        self.payload_len
    }
}
