// src/decryptor/mod.rs

//! High-level decoding facade.
//!
//! Core API: `decode(source, sink, aes_key, mac_key)?` for streaming input.
//! Convenience: `decode_to_vec(container, aes_key, mac_key)?`.
//! Helpers: `read_format_version`, `read_iv`, `DecryptionContext` for custom flows.

pub(crate) mod decode;
pub(crate) mod read;
pub(crate) mod stream;

pub use decode::{decode, decode_to_vec};
pub use read::{read_exact_span, read_format_version, read_iv};
pub use stream::{verify_trailer, DecryptionContext};
