//! Cipher Feedback (CFB) mode, full-block (128-bit) feedback
//!
//! Turns the block cipher into a self-synchronizing stream cipher: each
//! keystream block is the encryption of the previous ciphertext block (the IV
//! for the first), XORed into the data. Only the forward direction of the
//! block cipher is used, and no alignment is required; a trailing partial
//! segment XORs against a keystream prefix.

use super::super::{BlockCipher, AES_BLOCK_SIZE};
use crate::types::Iv;

/// CFB mode over a keyed block cipher
pub struct Cfb<B: BlockCipher> {
    cipher: B,
    iv: [u8; AES_BLOCK_SIZE],
}

impl<B: BlockCipher> Cfb<B> {
    /// Create a CFB engine for one encryption or decryption pass
    pub fn new(cipher: B, iv: &Iv) -> Self {
        Self { cipher, iv: **iv }
    }

    /// Encrypt a buffer of any length
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut feedback = self.iv;

        for chunk in plaintext.chunks(AES_BLOCK_SIZE) {
            let mut keystream = feedback;
            self.cipher.encrypt_block(&mut keystream);

            let start = ciphertext.len();
            for (i, (p, k)) in chunk.iter().zip(keystream.iter()).enumerate() {
                ciphertext.push(p ^ k);
                feedback[i] = ciphertext[start + i];
            }
        }

        ciphertext
    }

    /// Decrypt a buffer of any length
    pub fn decrypt(&self, ciphertext: &[u8]) -> Vec<u8> {
        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut feedback = self.iv;

        for chunk in ciphertext.chunks(AES_BLOCK_SIZE) {
            let mut keystream = feedback;
            self.cipher.encrypt_block(&mut keystream);

            for (i, (c, k)) in chunk.iter().zip(keystream.iter()).enumerate() {
                plaintext.push(c ^ k);
                feedback[i] = *c;
            }
        }

        plaintext
    }
}
