//! # blobcrypt
//!
//! Drop-in AES encryption and decryption of opaque byte blobs (config
//! secrets, session payloads) under a caller-supplied key, in two classical
//! block-cipher modes: CFB and CBC.
//!
//! Each call pads the plaintext PKCS-style, draws a fresh one-block IV from
//! the OS random source, encrypts, and returns `IV || ciphertext`. Calls are
//! pure functions of their inputs; no key or buffer is retained.
//!
//! ```
//! use blobcrypt::{cbc_encrypt, cbc_decrypt};
//!
//! fn example() -> blobcrypt::Result<()> {
//!     let key = [7u8; 32]; // 16, 24, or 32 bytes
//!     let ciphertext = cbc_encrypt(&key, b"helloworld")?;
//!     let plaintext = cbc_decrypt(&key, &ciphertext)?;
//!     assert_eq!(plaintext, b"helloworld");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Security notes
//!
//! These modes provide confidentiality only. There is no integrity tag: a
//! tampered ciphertext decrypts to garbage (or a padding error) rather than
//! being rejected. Callers needing tamper detection should use an AEAD
//! scheme instead.

#![forbid(unsafe_code)]

pub mod block;
pub mod envelope;
pub mod error;
pub mod padding;
pub mod types;

// Re-export the public operation surface
pub use block::{AesCipher, BlockCipher, Cbc, Cfb, AES_BLOCK_SIZE};
pub use envelope::{
    cbc_decrypt, cbc_decrypt_with, cbc_encrypt, cfb_decrypt, cfb_decrypt_with, cfb_encrypt,
    UnpadMode,
};
pub use error::{Error, Result};
pub use types::Iv;
