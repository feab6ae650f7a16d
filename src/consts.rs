//! # Constants
//!
//! Container layout and streaming parameters shared by the encoder and decoder.

/// The container format version produced and accepted by this library.
pub const FORMAT_VERSION: u8 = 0x01;

/// Default number of bytes processed per streaming window (16 KiB).
pub const WINDOW_SIZE: usize = 16 * 1024;

/// Smallest window the tail-deferral decoder can make progress with.
///
/// Every window must hold the full tag plus at least one payload byte.
pub const MIN_WINDOW_SIZE: usize = TAG_SIZE + 1;

/// Largest window accepted by [`CodecBuilder`](crate::builders::CodecBuilder) (16 MiB).
pub const MAX_WINDOW_SIZE: usize = 16 * 1024 * 1024;

/// Length of the version field in bytes.
pub const VERSION_SIZE: usize = 1;

/// Length of the counter-mode IV in bytes.
pub const IV_SIZE: usize = 16;

/// Length of the HMAC-SHA512 authentication tag in bytes.
pub const TAG_SIZE: usize = 64;

/// AES block length in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Offset of the version byte.
pub const VERSION_OFFSET: u64 = 0;

/// Offset of the IV.
pub const IV_OFFSET: u64 = VERSION_SIZE as u64;

/// Bytes preceding the ciphertext: version + IV.
pub const HEADER_LEN: usize = VERSION_SIZE + IV_SIZE;

/// Bytes a container adds on top of the plaintext length.
pub const CONTAINER_OVERHEAD: usize = HEADER_LEN + TAG_SIZE;

/// Default key length handed out by [`SessionKeys::generate_default`](crate::crypto::rng::SessionKeys::generate_default).
pub const DEFAULT_KEY_SIZE: usize = 32;
