//! src/encryptor/write.rs
//! Container field writers. Every field goes to the sink as its own chunk.

use crate::aliases::{Iv16, Tag64};
use crate::consts::FORMAT_VERSION;
use crate::error::CodecError;
use crate::sink::Sink;

#[inline]
pub fn write_octets<K: Sink + ?Sized>(sink: &mut K, data: &[u8]) -> Result<(), CodecError> {
    sink.accept(data)
}

/// The leading version byte; always [`FORMAT_VERSION`].
#[inline]
pub fn write_version<K: Sink + ?Sized>(sink: &mut K) -> Result<(), CodecError> {
    write_octets(sink, &[FORMAT_VERSION])
}

#[inline]
pub fn write_iv<K: Sink + ?Sized>(sink: &mut K, iv: &Iv16) -> Result<(), CodecError> {
    write_octets(sink, &iv[..])
}

#[inline]
pub fn write_tag<K: Sink + ?Sized>(sink: &mut K, tag: &Tag64) -> Result<(), CodecError> {
    write_octets(sink, &tag[..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeroize::Zeroizing;

    #[test]
    fn fields_are_separate_chunks() {
        let mut chunks: Vec<Vec<u8>> = Vec::new();
        let mut sink = crate::sink::from_fn(|c| {
            chunks.push(c.to_vec());
            Ok(())
        });
        write_version(&mut sink).unwrap();
        write_iv(&mut sink, &Zeroizing::new([7u8; 16])).unwrap();
        write_tag(&mut sink, &Zeroizing::new([9u8; 64])).unwrap();
        drop(sink);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], [FORMAT_VERSION]);
        assert_eq!(chunks[1], [7u8; 16]);
        assert_eq!(chunks[2], vec![9u8; 64]);
    }

    #[test]
    fn version_byte_is_fixed() {
        let mut out = Vec::new();
        write_version(&mut out).unwrap();
        assert_eq!(out, [0x01]);
    }
}
