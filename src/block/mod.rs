//! Block cipher primitive and modes of operation

pub mod aes;
pub mod modes;

pub use aes::AesCipher;
pub use modes::{Cbc, Cfb};

/// AES block size in bytes, shared by all key sizes
pub const AES_BLOCK_SIZE: usize = 16;

/// A keyed block cipher operating on single blocks
///
/// The seam between the cipher primitive and the modes of operation: the
/// engines in [`modes`] are written against this trait and never touch key
/// material themselves.
pub trait BlockCipher {
    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut [u8; AES_BLOCK_SIZE]);

    /// Decrypt one block in place
    fn decrypt_block(&self, block: &mut [u8; AES_BLOCK_SIZE]);
}
