//! Value types shared across the crate

use core::fmt;
use core::ops::Deref;

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::block::AES_BLOCK_SIZE;
use crate::error::{validate, Error, Result};

/// One-block initialization vector
///
/// An IV is freshly generated for every encryption call and is never secret;
/// it travels in-band as the first block of the ciphertext.
#[derive(Clone, Zeroize)]
pub struct Iv {
    data: [u8; AES_BLOCK_SIZE],
}

impl Iv {
    /// Create an IV from an existing block
    pub fn new(data: [u8; AES_BLOCK_SIZE]) -> Self {
        Self { data }
    }

    /// Create an IV from a slice, if it is exactly one block long
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::exact_length("IV", slice.len(), AES_BLOCK_SIZE)?;

        let mut data = [0u8; AES_BLOCK_SIZE];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Draw a fresh IV from the OS cryptographic random source
    ///
    /// A failing entropy source is surfaced as [`Error::RandomSource`],
    /// never silently degraded.
    pub fn random() -> Result<Self> {
        let mut data = [0u8; AES_BLOCK_SIZE];
        OsRng
            .try_fill_bytes(&mut data)
            .map_err(|source| Error::RandomSource { source })?;
        Ok(Self { data })
    }
}

impl AsRef<[u8]> for Iv {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Deref for Iv {
    type Target = [u8; AES_BLOCK_SIZE];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl fmt::Debug for Iv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iv({} bytes)", AES_BLOCK_SIZE)
    }
}
