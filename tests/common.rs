//! tests/common.rs
//! Common constants and utilities shared across test files

#![allow(dead_code)] // Each test binary uses a different subset

/// Fixed AES-256 key used where randomness is irrelevant
pub const TEST_AES_KEY: [u8; 32] = [0x42; 32];

/// Fixed MAC key used where randomness is irrelevant
pub const TEST_MAC_KEY: [u8; 32] = [0x24; 32];

/// Common test data strings used across multiple tests
pub const TEST_DATA: &[u8] = b"test data";

pub const TEST_DATA_SHORT: &[u8] = b"selam";

/// Standard window size, duplicated so tests fail loudly if it ever changes
pub const WINDOW: usize = 16 * 1024;

/// Version + IV + tag
pub const OVERHEAD: usize = 1 + 16 + 64;

/// Deterministic, non-repeating-looking plaintext of `len` bytes
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| (i.wrapping_mul(31) ^ (i >> 8)) as u8)
        .collect()
}

/// Encode with the fixed test keys
pub fn encode_fixed(plaintext: &[u8]) -> Vec<u8> {
    aesctr_stream::encode_to_vec(plaintext, &TEST_AES_KEY, &TEST_MAC_KEY)
        .unwrap_or_else(|e| panic!("encode of {} bytes failed: {e}", plaintext.len()))
}
