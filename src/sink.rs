//! # Sinks
//!
//! The codec pushes every output chunk, in order, to a [`Sink`]. A sink may
//! fail; the error aborts the running encode or decode immediately and is
//! returned to the caller unchanged.

use crate::error::CodecError;
use std::io::Write;

/// Receiver for emitted chunks.
pub trait Sink {
    /// Accept the next chunk. Returning an error aborts processing.
    fn accept(&mut self, chunk: &[u8]) -> Result<(), CodecError>;
}

impl Sink for Vec<u8> {
    #[inline]
    fn accept(&mut self, chunk: &[u8]) -> Result<(), CodecError> {
        self.extend_from_slice(chunk);
        Ok(())
    }
}

impl<K: Sink + ?Sized> Sink for &mut K {
    #[inline]
    fn accept(&mut self, chunk: &[u8]) -> Result<(), CodecError> {
        (**self).accept(chunk)
    }
}

/// Forwards chunks to an [`std::io::Write`] with `write_all`.
#[derive(Debug)]
pub struct WriteSink<W> {
    inner: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for WriteSink<W> {
    fn accept(&mut self, chunk: &[u8]) -> Result<(), CodecError> {
        self.inner.write_all(chunk).map_err(CodecError::Io)
    }
}

/// Sink backed by a closure; see [`from_fn`].
pub struct FnSink<F> {
    f: F,
}

/// Build a sink from a closure.
///
/// ```
/// use aesctr_stream::sink::{from_fn, Sink};
///
/// let mut sizes = Vec::new();
/// let mut sink = from_fn(|chunk| {
///     sizes.push(chunk.len());
///     Ok(())
/// });
/// sink.accept(b"abc")?;
/// drop(sink);
/// assert_eq!(sizes, [3]);
/// # Ok::<(), aesctr_stream::CodecError>(())
/// ```
pub fn from_fn<F>(f: F) -> FnSink<F>
where
    F: FnMut(&[u8]) -> Result<(), CodecError>,
{
    FnSink { f }
}

impl<F> Sink for FnSink<F>
where
    F: FnMut(&[u8]) -> Result<(), CodecError>,
{
    #[inline]
    fn accept(&mut self, chunk: &[u8]) -> Result<(), CodecError> {
        (self.f)(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn vec_sink_appends() {
        let mut out = Vec::<u8>::new();
        out.accept(b"ab").unwrap();
        out.accept(b"cd").unwrap();
        assert_eq!(out, b"abcd");
    }

    #[test]
    fn write_sink_maps_io_errors() {
        let mut sink = WriteSink::new(BrokenPipe);
        assert!(matches!(sink.accept(b"x"), Err(CodecError::Io(_))));

        let mut ok = WriteSink::new(Vec::<u8>::new());
        ok.accept(b"hello").unwrap();
        assert_eq!(ok.into_inner(), b"hello");
    }

    #[test]
    fn closure_sink_can_abort() {
        let mut calls = 0;
        let mut sink = from_fn(|_| {
            calls += 1;
            Err(CodecError::Aborted("stop".into()))
        });
        assert!(matches!(sink.accept(b"x"), Err(CodecError::Aborted(_))));
        drop(sink);
        assert_eq!(calls, 1);
    }
}
