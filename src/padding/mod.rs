//! PKCS-style block padding
//!
//! Aligns arbitrary-length plaintext to the cipher block size. Every pad byte
//! carries the pad length, and a full block of padding is appended when the
//! input is already aligned, so padding is never empty and [`unpad`] can
//! always recover the exact plaintext boundary.

use subtle::{Choice, ConstantTimeEq};

use crate::error::{Error, Result};

/// Pad `data` up to the next multiple of `block_size`
///
/// Appends `pad_size = block_size - data.len() % block_size` bytes, each with
/// value `pad_size`. The result is always strictly longer than the input and
/// a positive multiple of `block_size`.
///
/// # Panics
///
/// Panics if `block_size` is zero or larger than 255 (the pad length must fit
/// in a single byte).
pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    assert!(
        block_size >= 1 && block_size <= 255,
        "block size must be in 1..=255"
    );

    let pad_size = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + pad_size);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_size, pad_size as u8);
    padded
}

/// Strip the padding from `padded`, returning the original data
///
/// Reads the final byte as the pad length and drops that many bytes. Fails
/// with [`Error::Padding`] if the buffer is empty or the pad length exceeds
/// the buffer length, which is what decrypting under the wrong key typically
/// produces.
///
/// Only the length byte is validated; the remaining pad bytes are not
/// inspected. [`unpad_strict`] performs the full check.
pub fn unpad(padded: &[u8]) -> Result<&[u8]> {
    let pad_size = match padded.last() {
        Some(&b) => b as usize,
        None => return Err(Error::Padding),
    };
    if pad_size > padded.len() {
        return Err(Error::Padding);
    }
    Ok(&padded[..padded.len() - pad_size])
}

/// Strip padding, verifying every pad byte
///
/// In addition to the checks in [`unpad`], requires the pad length to be in
/// `1..=block_size` and every one of the trailing `pad_size` bytes to equal
/// the pad length. The trailing bytes are compared in constant time so the
/// failure position leaks nothing about the decrypted buffer.
pub fn unpad_strict(padded: &[u8], block_size: usize) -> Result<&[u8]> {
    let pad_size = match padded.last() {
        Some(&b) => b as usize,
        None => return Err(Error::Padding),
    };
    if pad_size == 0 || pad_size > block_size || pad_size > padded.len() {
        return Err(Error::Padding);
    }

    let pad_byte = pad_size as u8;
    let tail = &padded[padded.len() - pad_size..];
    let all_equal = tail
        .iter()
        .fold(Choice::from(1), |acc, b| acc & b.ct_eq(&pad_byte));
    if !bool::from(all_equal) {
        return Err(Error::Padding);
    }
    Ok(&padded[..padded.len() - pad_size])
}

#[cfg(test)]
mod tests;
