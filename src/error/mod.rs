//! Error handling for blob encryption operations
//!
//! Every failure is returned to the immediate caller; nothing is retried,
//! logged, or swallowed internally, and no partial output is ever produced
//! alongside an error.

use thiserror::Error;

pub mod validate;

/// The error type for all encryption and decryption operations
#[derive(Debug, Error)]
pub enum Error {
    /// Key length is not one of the supported AES key sizes (16, 24, or 32 bytes)
    #[error("invalid key length: {actual} bytes (expected 16, 24, or 32)")]
    InvalidKey {
        /// Actual length of the rejected key in bytes
        actual: usize,
    },

    /// The OS random source failed to fill the IV buffer
    #[error("random source failure while generating IV")]
    RandomSource {
        #[source]
        source: rand::Error,
    },

    /// Ciphertext is empty, too short to contain an IV, or not block-aligned
    #[error("malformed {context}: {actual} bytes is not a positive multiple of the block size")]
    MalformedInput {
        /// Buffer being validated when the check failed
        context: &'static str,
        /// Actual length of the rejected buffer in bytes
        actual: usize,
    },

    /// Unpadding failed: corrupt ciphertext or decryption under the wrong key
    #[error("invalid padding")]
    Padding,
}

/// Result type for all encryption and decryption operations
pub type Result<T> = core::result::Result<T, Error>;
