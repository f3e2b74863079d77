//! Validation helpers shared by the mode engines and facades

use super::{Error, Result};

/// Validate that a buffer length is a multiple of the block size
///
/// An empty buffer passes: zero blocks is a valid amount of work for a mode
/// engine. Use [`nonempty_block_aligned`] where an IV must be present.
#[inline(always)]
pub fn block_aligned(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if actual % block_size != 0 {
        return Err(Error::MalformedInput { context, actual });
    }
    Ok(())
}

/// Validate that a buffer length is a positive multiple of the block size
///
/// Rejects empty buffers and covers "too short to contain an IV" and "not
/// block-aligned" in one check.
#[inline(always)]
pub fn nonempty_block_aligned(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if actual == 0 || actual % block_size != 0 {
        return Err(Error::MalformedInput { context, actual });
    }
    Ok(())
}

/// Validate an exact length, reporting the buffer as malformed otherwise
#[inline(always)]
pub fn exact_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::MalformedInput { context, actual });
    }
    Ok(())
}
