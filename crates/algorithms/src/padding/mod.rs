//! PKCS#7 padding
//!
//! A padded buffer is always a positive multiple of the block size and ends in
//! `N` bytes of value `N`, `1 <= N <= block_size`. Already aligned input gets a
//! whole block of padding.

use subtle::ConstantTimeEq;

use api::error::{Error, Result};

/// Number of padding bytes `pad` appends to `len` bytes of data
#[inline(always)]
pub fn padding_len(len: usize, block_size: usize) -> usize {
    block_size - (len % block_size)
}

/// Appends PKCS#7 padding, returning a new buffer
pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    debug_assert!((1..=255).contains(&block_size));

    let n = padding_len(data.len(), block_size);
    let mut padded = Vec::with_capacity(data.len() + n);
    padded.extend_from_slice(data);
    padded.resize(data.len() + n, n as u8);
    padded
}

/// Length of the data once the padding is stripped
///
/// Fails with `InvalidPadding` if the buffer is empty or not block aligned,
/// if the trailing byte is 0 or exceeds the block size, or if any of the last
/// `N` bytes differs from `N`.
pub fn unpadded_len(data: &[u8], block_size: usize) -> Result<usize> {
    let n = match data.last() {
        Some(&last) => last as usize,
        None => return Err(Error::InvalidPadding),
    };
    if data.len() % block_size != 0 || n == 0 || n > block_size || n > data.len() {
        return Err(Error::InvalidPadding);
    }

    let expected = vec![n as u8; n];
    let tail = &data[data.len() - n..];
    if !bool::from(tail.ct_eq(&expected[..])) {
        return Err(Error::InvalidPadding);
    }
    Ok(data.len() - n)
}

/// Strips PKCS#7 padding, borrowing the unpadded prefix
pub fn unpad(data: &[u8], block_size: usize) -> Result<&[u8]> {
    let len = unpadded_len(data, block_size)?;
    Ok(&data[..len])
}

/// Whether `data` carries valid PKCS#7 padding for `block_size`
pub fn is_valid_pkcs7(data: &[u8], block_size: usize) -> bool {
    unpadded_len(data, block_size).is_ok()
}
