// src/lib.rs

//! Streaming AES-CTR + HMAC-SHA512 container codec.
//!
//! A container is `version(1) ‖ iv(16) ‖ ciphertext(N) ‖ tag(64)`. Both
//! directions work in bounded windows over a random-access [`ByteSource`] and
//! push chunks to a [`Sink`]; the decoder isolates the trailing tag without
//! knowing the stream length in advance.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod header;
pub mod sink;
pub mod source;
pub mod utils;

// High-level API
pub use decryptor::{decode, decode_to_vec};
pub use encryptor::{encode, encode_to_vec};
pub use error::CodecError;

pub use builders::{Codec, CodecBuilder};
pub use crypto::rng::{generate_key, SessionKeys};
pub use header::{container_len, plaintext_len, read_version};
pub use sink::{Sink, WriteSink};
pub use source::{ByteSource, ReadSeekSource};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decode_batch, encode_batch};
