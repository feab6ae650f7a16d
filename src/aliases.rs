//! # Secret Buffer Aliases
//!
//! Every buffer that holds key material, an IV, a tag or a window of plaintext
//! is wrapped in [`Zeroizing`] and wiped when dropped.
//!
//! ## HMAC Primitives
//! - [`HmacSha512`] - streaming MAC over IV and ciphertext
//!
//! ## Fixed-Size Buffers
//! - [`Block16`] - one AES keystream block
//! - [`Iv16`] - counter-mode initialization vector
//! - [`Tag64`] - HMAC-SHA512 trailer
//!
//! ## Dynamic Buffers
//! - [`SecretBytes`] - caller-visible key material
//! - [`WindowBuffer`] - reusable streaming window

use crate::consts::{BLOCK_SIZE, IV_SIZE, TAG_SIZE};
use hmac::Hmac;
use sha2::Sha512;
use zeroize::Zeroizing;

pub type HmacSha512 = Hmac<Sha512>;

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type Block16 = Zeroizing<[u8; BLOCK_SIZE]>;
pub type Iv16 = Zeroizing<[u8; IV_SIZE]>;
pub type Tag64 = Zeroizing<[u8; TAG_SIZE]>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type SecretBytes = Zeroizing<Vec<u8>>;
pub type WindowBuffer = Zeroizing<Vec<u8>>;
