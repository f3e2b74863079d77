//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block (the IV
//! for the first block) before encryption, per NIST SP 800-38A. Input must be
//! block-aligned; padding is the caller's responsibility.

use super::super::{BlockCipher, AES_BLOCK_SIZE};
use crate::error::{validate, Result};
use crate::types::Iv;

/// CBC mode over a keyed block cipher
pub struct Cbc<B: BlockCipher> {
    cipher: B,
    iv: [u8; AES_BLOCK_SIZE],
}

impl<B: BlockCipher> Cbc<B> {
    /// Create a CBC engine for one encryption or decryption pass
    pub fn new(cipher: B, iv: &Iv) -> Self {
        Self { cipher, iv: **iv }
    }

    /// Encrypt a block-aligned buffer
    ///
    /// Fails with [`MalformedInput`](crate::Error::MalformedInput) if the
    /// length is not a multiple of the block size; no block is processed in
    /// that case.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("CBC plaintext", plaintext.len(), AES_BLOCK_SIZE)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut prev = self.iv;

        for chunk in plaintext.chunks_exact(AES_BLOCK_SIZE) {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);

            for (b, p) in block.iter_mut().zip(prev.iter()) {
                *b ^= p;
            }
            self.cipher.encrypt_block(&mut block);

            ciphertext.extend_from_slice(&block);
            prev = block;
        }

        Ok(ciphertext)
    }

    /// Decrypt a block-aligned buffer
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("CBC ciphertext", ciphertext.len(), AES_BLOCK_SIZE)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut prev = self.iv;

        for chunk in ciphertext.chunks_exact(AES_BLOCK_SIZE) {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);

            let current = block;
            self.cipher.decrypt_block(&mut block);
            for (b, p) in block.iter_mut().zip(prev.iter()) {
                *b ^= p;
            }

            plaintext.extend_from_slice(&block);
            prev = current;
        }

        Ok(plaintext)
    }
}
