//! src/decryptor/read.rs
//! Header field readers for the decoder.

use crate::aliases::Iv16;
use crate::consts::{FORMAT_VERSION, IV_OFFSET, IV_SIZE, VERSION_OFFSET};
use crate::error::CodecError;
use crate::source::ByteSource;
use zeroize::Zeroizing;

/// Read exactly `N` bytes at `offset` into a stack array.
///
/// A short read means the container ended inside `field`.
#[inline(always)]
pub fn read_exact_span<S, const N: usize>(
    source: &mut S,
    offset: u64,
    field: &'static str,
) -> Result<[u8; N], CodecError>
where
    S: ByteSource + ?Sized,
{
    let mut buf = [0u8; N];
    if source.read_at(offset, &mut buf)? < N {
        return Err(CodecError::TruncatedInput(field));
    }
    Ok(buf)
}

/// Read and validate the leading version byte.
#[inline(always)]
pub fn read_format_version<S>(source: &mut S) -> Result<u8, CodecError>
where
    S: ByteSource + ?Sized,
{
    let [version] = read_exact_span::<_, 1>(source, VERSION_OFFSET, "version")?;
    if version != FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion(version));
    }
    Ok(version)
}

/// Read the 16-byte IV that follows the version byte.
#[inline(always)]
pub fn read_iv<S>(source: &mut S) -> Result<Iv16, CodecError>
where
    S: ByteSource + ?Sized,
{
    let iv = read_exact_span::<_, IV_SIZE>(source, IV_OFFSET, "iv")?;
    Ok(Zeroizing::new(iv))
}
