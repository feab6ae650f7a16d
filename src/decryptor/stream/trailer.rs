//! src/decryptor/stream/trailer.rs
//! Whole-stream, constant-time trailer verification.

use crate::crypto::hmac::StreamingMac;
use crate::decryptor::stream::context::DecryptionContext;
use crate::error::CodecError;
use tracing::warn;

/// Compare the isolated tag against the MAC over `iv ‖ ciphertext`.
///
/// Must only be called after [`DecryptionContext::decrypt_windows`] returned
/// `Ok`; a context without a tag is reported as truncated.
#[inline(always)]
pub fn verify_trailer(mac: StreamingMac, ctx: &DecryptionContext) -> Result<(), CodecError> {
    let tag = ctx.tag().ok_or(CodecError::TruncatedInput("tag"))?;
    mac.verify(tag).map_err(|e| {
        warn!(
            payload_len = ctx.payload_len(),
            "authentication failed; emitted plaintext must be discarded"
        );
        e
    })
}
