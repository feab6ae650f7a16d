// src/decryptor/stream/mod.rs
pub(crate) mod context;
pub(crate) mod trailer;

pub use context::DecryptionContext;
pub use trailer::verify_trailer;
