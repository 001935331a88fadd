//! Validation utilities shared by every layer of the library
//!
//! Each helper maps a failed check onto the matching [`Error`] variant so call
//! sites can simply use `?`.

use super::{Error, Result};
use crate::types::KeySize;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, message));
    }
    Ok(())
}

/// Validate a key length and return the matching key size
#[inline(always)]
pub fn key_size(actual: usize) -> Result<KeySize> {
    KeySize::from_len(actual).ok_or(Error::InvalidKeySize { actual })
}

/// Validate an initialization vector length
#[inline(always)]
pub fn iv_size(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidIvSize { expected, actual });
    }
    Ok(())
}

/// Validate that a buffer is a whole number of blocks
#[inline(always)]
pub fn block_aligned(actual: usize, block_size: usize) -> Result<()> {
    if actual % block_size != 0 {
        return Err(Error::InvalidCiphertextLength { block_size, actual });
    }
    Ok(())
}
