//! AES keyed by caller-supplied bytes
//!
//! The key length selects the variant: 16 bytes for AES-128, 24 for AES-192,
//! 32 for AES-256. Any other length is rejected before any IV generation or
//! padding takes place.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};

use super::{BlockCipher, AES_BLOCK_SIZE};
use crate::error::{Error, Result};

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;
/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;
/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES with the variant chosen by key length
pub enum AesCipher {
    /// AES-128 (16-byte key)
    Aes128(Aes128),
    /// AES-192 (24-byte key)
    Aes192(Aes192),
    /// AES-256 (32-byte key)
    Aes256(Aes256),
}

impl AesCipher {
    /// Key the cipher, selecting the AES variant by key length
    ///
    /// Fails with [`Error::InvalidKey`] for any length other than 16, 24,
    /// or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        let invalid = |_| Error::InvalidKey { actual: key.len() };
        match key.len() {
            AES128_KEY_SIZE => Ok(Self::Aes128(Aes128::new_from_slice(key).map_err(invalid)?)),
            AES192_KEY_SIZE => Ok(Self::Aes192(Aes192::new_from_slice(key).map_err(invalid)?)),
            AES256_KEY_SIZE => Ok(Self::Aes256(Aes256::new_from_slice(key).map_err(invalid)?)),
            actual => Err(Error::InvalidKey { actual }),
        }
    }
}

impl BlockCipher for AesCipher {
    fn encrypt_block(&self, block: &mut [u8; AES_BLOCK_SIZE]) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.encrypt_block(block),
            Self::Aes192(c) => c.encrypt_block(block),
            Self::Aes256(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut [u8; AES_BLOCK_SIZE]) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.decrypt_block(block),
            Self::Aes192(c) => c.decrypt_block(block),
            Self::Aes256(c) => c.decrypt_block(block),
        }
    }
}
