// src/encryptor/mod.rs

//! High-level encoding facade.
//!
//! Core API: `encode(source, sink, aes_key, mac_key)?` for streaming input.
//! Convenience: `encode_to_vec(plaintext, aes_key, mac_key)?` for in-memory data.
//! Helpers: field writers for custom framing flows.

pub(crate) mod encode;
pub(crate) mod stream;
pub(crate) mod write;

pub use encode::{encode, encode_to_vec};
pub use stream::encrypt_windows;
pub use write::{write_iv, write_octets, write_tag, write_version};
