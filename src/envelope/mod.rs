//! Encrypt/decrypt facades for both cipher modes
//!
//! Both modes share one orchestration: pad, draw a fresh IV, encrypt, and
//! prefix the IV to the output. Decryption validates the buffer, splits off
//! the IV, decrypts, and unpads. The wire format is identical for both modes:
//!
//! ```text
//! [16 bytes: IV][remaining: mode-encrypted padded plaintext]
//! ```
//!
//! There is no version tag and no integrity tag; callers agree on key and
//! mode out-of-band, and a tampered ciphertext decrypts to garbage rather
//! than being rejected.

use zeroize::Zeroizing;

use crate::block::{AesCipher, Cbc, Cfb, AES_BLOCK_SIZE};
use crate::error::{validate, Result};
use crate::padding;
use crate::types::Iv;

/// How thoroughly [`cfb_decrypt_with`] and [`cbc_decrypt_with`] check padding
///
/// The lenient check reads only the pad-length byte, which is what data
/// encrypted by prior deployments of this scheme was written against. The
/// strict check additionally verifies every pad byte in constant time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnpadMode {
    /// Validate only the pad-length byte (compatibility default)
    #[default]
    Lenient,
    /// Validate every pad byte
    Strict,
}

/// Cipher mode selector for the shared orchestration
#[derive(Clone, Copy)]
enum Mode {
    Cfb,
    Cbc,
}

/// Encrypt `plaintext` under `key` in CFB mode
///
/// Returns `IV || ciphertext`. The key must be 16, 24, or 32 bytes.
pub fn cfb_encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    seal(Mode::Cfb, key, plaintext)
}

/// Decrypt a [`cfb_encrypt`] ciphertext under `key`
pub fn cfb_decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    open(Mode::Cfb, key, ciphertext, UnpadMode::Lenient)
}

/// Decrypt a CFB ciphertext with an explicit padding strictness
pub fn cfb_decrypt_with(key: &[u8], ciphertext: &[u8], unpad: UnpadMode) -> Result<Vec<u8>> {
    open(Mode::Cfb, key, ciphertext, unpad)
}

/// Encrypt `plaintext` under `key` in CBC mode
///
/// Returns `IV || ciphertext`. The key must be 16, 24, or 32 bytes.
pub fn cbc_encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    seal(Mode::Cbc, key, plaintext)
}

/// Decrypt a [`cbc_encrypt`] ciphertext under `key`
pub fn cbc_decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    open(Mode::Cbc, key, ciphertext, UnpadMode::Lenient)
}

/// Decrypt a CBC ciphertext with an explicit padding strictness
pub fn cbc_decrypt_with(key: &[u8], ciphertext: &[u8], unpad: UnpadMode) -> Result<Vec<u8>> {
    open(Mode::Cbc, key, ciphertext, unpad)
}

fn seal(mode: Mode, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    // Key validation comes first: a bad key fails before any padding or
    // entropy is consumed.
    let cipher = AesCipher::new(key)?;

    let padded = Zeroizing::new(padding::pad(plaintext, AES_BLOCK_SIZE));
    let iv = Iv::random()?;

    let body = match mode {
        Mode::Cfb => Cfb::new(cipher, &iv).encrypt(&padded),
        Mode::Cbc => Cbc::new(cipher, &iv).encrypt(&padded)?,
    };

    let mut out = Vec::with_capacity(AES_BLOCK_SIZE + body.len());
    out.extend_from_slice(iv.as_ref());
    out.extend_from_slice(&body);
    Ok(out)
}

fn open(mode: Mode, key: &[u8], ciphertext: &[u8], unpad: UnpadMode) -> Result<Vec<u8>> {
    let cipher = AesCipher::new(key)?;

    // One check covers "empty", "too short to contain an IV", and "not
    // block-aligned"; nothing is decrypted unless it passes.
    validate::nonempty_block_aligned("ciphertext", ciphertext.len(), AES_BLOCK_SIZE)?;

    let (iv_bytes, body) = ciphertext.split_at(AES_BLOCK_SIZE);
    let iv = Iv::from_slice(iv_bytes)?;

    let padded = Zeroizing::new(match mode {
        Mode::Cfb => Cfb::new(cipher, &iv).decrypt(body),
        Mode::Cbc => {
            validate::block_aligned("CBC ciphertext body", body.len(), AES_BLOCK_SIZE)?;
            Cbc::new(cipher, &iv).decrypt(body)?
        }
    });

    let recovered = match unpad {
        UnpadMode::Lenient => padding::unpad(&padded)?,
        UnpadMode::Strict => padding::unpad_strict(&padded, AES_BLOCK_SIZE)?,
    };
    Ok(recovered.to_vec())
}
