//! # Error Types
//!
//! All operations return [`Result<T, CodecError>`](CodecError). Every error is
//! terminal for the call that raised it; nothing is retried internally.

use thiserror::Error;

/// The error type for all encode, decode and key-generation operations.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The caller supplied unusable input.
    ///
    /// Raised for an empty plaintext, empty key material, a zero key size,
    /// or a window size outside the supported range.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The random source or a primitive could not be set up.
    ///
    /// Covers OS randomness failures and AES keys of a length the block
    /// cipher does not accept.
    #[error("system error: {0}")]
    System(String),

    /// The container ended before a required field was complete.
    ///
    /// The contained value names the missing field (`"version"`, `"iv"` or `"tag"`).
    #[error("truncated input: missing {0}")]
    TruncatedInput(&'static str),

    /// The container carries a version byte this library does not understand.
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    /// The trailing tag does not match the MAC over IV and ciphertext.
    ///
    /// Everything the sink received during the failed call must be discarded.
    #[error("invalid authentication tag")]
    InvalidAuthentication,

    /// An `std::io` backed source or sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A sink cancelled the operation.
    #[error("aborted: {0}")]
    Aborted(String),
}

impl From<&'static str> for CodecError {
    fn from(msg: &'static str) -> Self {
        CodecError::System(msg.to_string())
    }
}
