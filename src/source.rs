//! # Byte Sources
//!
//! The codec reads its input through [`ByteSource`], a random-access view that
//! may be re-read at any offset. Implementations must:
//!
//! - return fewer bytes than requested only at end-of-stream;
//! - return the same bytes for repeated identical reads.
//!
//! In-memory slices and vectors implement the trait directly; anything that is
//! `Read + Seek` (files, cursors) can be adapted with [`ReadSeekSource`].

use crate::error::CodecError;
use std::io::{ErrorKind, Read, Seek, SeekFrom};

/// Random-access input for the encoder and decoder.
pub trait ByteSource {
    /// Copy up to `buf.len()` bytes starting at `offset` into `buf`.
    ///
    /// Returns the number of bytes copied; `0` means `offset` is at or past the end.
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, CodecError>;
}

#[inline]
fn read_slice_at(bytes: &[u8], offset: u64, buf: &mut [u8]) -> usize {
    let start = usize::try_from(offset).map_or(bytes.len(), |o| o.min(bytes.len()));
    let n = (bytes.len() - start).min(buf.len());
    buf[..n].copy_from_slice(&bytes[start..start + n]);
    n
}

impl ByteSource for &[u8] {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, CodecError> {
        Ok(read_slice_at(self, offset, buf))
    }
}

impl ByteSource for Vec<u8> {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, CodecError> {
        Ok(read_slice_at(self, offset, buf))
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, CodecError> {
        (**self).read_at(offset, buf)
    }
}

/// Adapts any `Read + Seek` value (e.g. a [`std::fs::File`]) into a [`ByteSource`].
///
/// Each read seeks to the requested offset and keeps reading until the buffer
/// is full or the underlying reader reports end-of-file, so short reads only
/// ever happen at the end of the stream.
#[derive(Debug)]
pub struct ReadSeekSource<R> {
    inner: R,
}

impl<R: Read + Seek> ReadSeekSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> ByteSource for ReadSeekSource<R> {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, CodecError> {
        self.inner.seek(SeekFrom::Start(offset))?;
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(CodecError::Io(e)),
            }
        }
        Ok(filled)
    }
}
