//! Parallel encode/decode of independent messages.
//!
//! Each item gets its own IV, keystream and MAC; nothing is shared between
//! workers except the read-only key slices.

#[cfg(feature = "batch-ops")]
use rayon::prelude::*;

#[cfg(feature = "batch-ops")]
use crate::sink::Sink;
#[cfg(feature = "batch-ops")]
use crate::source::ByteSource;
#[cfg(feature = "batch-ops")]
use crate::{decode, encode, CodecError};

#[cfg(feature = "batch-ops")]
pub fn encode_batch<S, K>(batch: &mut [(S, K)], aes_key: &[u8], mac_key: &[u8]) -> Result<(), CodecError>
where
    S: ByteSource + Send,
    K: Sink + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| encode(src, dst, aes_key, mac_key))
}

/// Stops at the first failing item. The error does not say which item failed
/// and other items may have emitted unverified plaintext, so on `Err` every
/// sink in the batch must be discarded.
#[cfg(feature = "batch-ops")]
pub fn decode_batch<S, K>(batch: &mut [(S, K)], aes_key: &[u8], mac_key: &[u8]) -> Result<(), CodecError>
where
    S: ByteSource + Send,
    K: Sink + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| decode(src, dst, aes_key, mac_key))
}
