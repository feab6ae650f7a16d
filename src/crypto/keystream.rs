//! src/crypto/keystream.rs
//! AES counter-mode keystream.
//!
//! The counter block starts at the IV and is incremented as a 128-bit
//! big-endian integer per AES block. Partial blocks carry over between calls,
//! so applying the keystream to `[a, b)` then `[b, c)` equals one call over `[a, c)`.

use crate::aliases::{Block16, Iv16};
use crate::consts::BLOCK_SIZE;
use crate::error::CodecError;
use crate::utils::xor_in_place;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256, Block as AesBlock};
use zeroize::Zeroizing;

/// AES block cipher keyed by the caller's key length (16, 24 or 32 bytes).
enum BlockCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl BlockCipher {
    fn new(key: &[u8]) -> Result<Self, CodecError> {
        let cipher = match key.len() {
            16 => Aes128::new_from_slice(key).map(Self::Aes128),
            24 => Aes192::new_from_slice(key).map(Self::Aes192),
            32 => Aes256::new_from_slice(key).map(Self::Aes256),
            n => {
                return Err(CodecError::System(format!(
                    "invalid AES key length {n} (expected 16, 24 or 32)"
                )))
            }
        };
        cipher.map_err(|e| CodecError::System(format!("AES key setup: {e}")))
    }

    #[inline(always)]
    fn encrypt_block(&self, block: &mut AesBlock) {
        match self {
            Self::Aes128(c) => c.encrypt_block(block),
            Self::Aes192(c) => c.encrypt_block(block),
            Self::Aes256(c) => c.encrypt_block(block),
        }
    }
}

/// Stateful AES-CTR keystream generator.
pub struct AesCtr {
    cipher: BlockCipher,
    counter: u128,
    keystream: Block16,
    used: usize,
}

impl AesCtr {
    /// Build a keystream from an AES key and a 16-byte IV.
    pub fn new(key: &[u8], iv: &Iv16) -> Result<Self, CodecError> {
        Ok(Self {
            cipher: BlockCipher::new(key)?,
            counter: u128::from_be_bytes(**iv),
            keystream: Zeroizing::new([0u8; BLOCK_SIZE]),
            used: BLOCK_SIZE,
        })
    }

    /// XOR the next `data.len()` keystream bytes into `data`.
    ///
    /// Encryption and decryption are the same operation.
    pub fn apply_keystream(&mut self, data: &mut [u8]) {
        let mut rest = data;
        while !rest.is_empty() {
            if self.used == BLOCK_SIZE {
                self.refill();
            }
            let take = (BLOCK_SIZE - self.used).min(rest.len());
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(take);
            xor_in_place(head, &self.keystream[self.used..self.used + take]);
            self.used += take;
            rest = tail;
        }
    }

    fn refill(&mut self) {
        let mut block = AesBlock::from(self.counter.to_be_bytes());
        self.cipher.encrypt_block(&mut block);
        self.keystream.copy_from_slice(block.as_slice());
        block.as_mut_slice().fill(0);
        self.counter = self.counter.wrapping_add(1);
        self.used = 0;
    }
}
