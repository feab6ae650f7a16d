//! Utility functions used across the library.

use crate::consts::{MAX_WINDOW_SIZE, MIN_WINDOW_SIZE};
use crate::error::CodecError;

/// Window must hold the tag plus at least one payload byte and stay under
/// [`MAX_WINDOW_SIZE`].
#[inline]
pub fn check_window_size(window_size: usize) -> Result<(), CodecError> {
    if !(MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&window_size) {
        return Err(CodecError::InvalidParameters(format!(
            "window size {window_size} outside {MIN_WINDOW_SIZE}..={MAX_WINDOW_SIZE}"
        )));
    }
    Ok(())
}

/// XORs `keystream` into `data` in place.
///
/// Only `min(data.len(), keystream.len())` bytes are touched; callers always
/// pass slices of equal length.
#[inline(always)]
pub fn xor_in_place(data: &mut [u8], keystream: &[u8]) {
    for (byte, key) in data.iter_mut().zip(keystream) {
        *byte ^= key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_is_an_involution() {
        let key = [0x5au8, 0xff, 0x00, 0x13];
        let mut data = *b"abcd";
        xor_in_place(&mut data, &key);
        assert_ne!(&data, b"abcd");
        xor_in_place(&mut data, &key);
        assert_eq!(&data, b"abcd");
    }

    #[test]
    fn window_size_bounds() {
        for bad in [0, 1, MIN_WINDOW_SIZE - 1, MAX_WINDOW_SIZE + 1] {
            assert!(matches!(
                check_window_size(bad),
                Err(CodecError::InvalidParameters(_))
            ));
        }
        assert!(check_window_size(MIN_WINDOW_SIZE).is_ok());
        assert!(check_window_size(MAX_WINDOW_SIZE).is_ok());
    }

    #[test]
    fn shorter_keystream_leaves_tail_alone() {
        let mut data = [1u8, 2, 3];
        xor_in_place(&mut data, &[1]);
        assert_eq!(data, [0, 2, 3]);
    }
}
