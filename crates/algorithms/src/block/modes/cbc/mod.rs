//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode is a block cipher mode of operation that provides confidentiality
//! by XORing each plaintext block with the previous ciphertext block before
//! encryption. The first block is XORed with an initialization vector (IV).
//!
//! Decryption chains on the *ciphertext*: plaintext block `i` is
//! `D(C[i]) ^ C[i-1]`, so a range of blocks can be decrypted on its own once
//! the ciphertext block preceding it is known. Encryption is strictly
//! sequential.
//!
//! This implementation follows NIST SP 800-38A. The plaintext must already be
//! padded to a whole number of blocks.

use zeroize::Zeroize;

use api::error::{validate, Result};
use params::utils::symmetric::{AES_BLOCK_SIZE, AES_CBC_IV_SIZE};

use super::{xor_block, BlockMonitor};
use crate::block::{Block, BlockCipher};

/// CBC mode over a borrowed block cipher
pub struct Cbc<'a, B: BlockCipher> {
    cipher: &'a B,
    iv: Block,
}

impl<'a, B: BlockCipher> Cbc<'a, B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be exactly one block long.
    pub fn new(cipher: &'a B, iv: &[u8]) -> Result<Self> {
        validate::iv_size(iv.len(), AES_CBC_IV_SIZE)?;

        let mut chain = [0u8; AES_BLOCK_SIZE];
        chain.copy_from_slice(iv);
        Ok(Self { cipher, iv: chain })
    }

    /// Encrypts a block-aligned buffer in place
    pub fn encrypt_in_place<M: BlockMonitor>(&self, data: &mut [u8], monitor: &M) -> Result<()> {
        validate::block_aligned(data.len(), AES_BLOCK_SIZE)?;

        let mut prev_block = self.iv;
        for (index, chunk) in data.chunks_exact_mut(AES_BLOCK_SIZE).enumerate() {
            monitor.before_block(index)?;

            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);

            // XOR with previous ciphertext block (or IV for the first block)
            xor_block(&mut block, &prev_block);
            self.cipher.encrypt_block(&mut block);

            chunk.copy_from_slice(&block);
            prev_block = block;

            monitor.after_block(index);
        }
        Ok(())
    }

    /// Decrypts a block-aligned buffer in place
    pub fn decrypt_in_place<M: BlockMonitor>(&self, data: &mut [u8], monitor: &M) -> Result<()> {
        validate::block_aligned(data.len(), AES_BLOCK_SIZE)?;

        let mut prev_block = self.iv;
        for (index, chunk) in data.chunks_exact_mut(AES_BLOCK_SIZE).enumerate() {
            monitor.before_block(index)?;

            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);

            // Save current ciphertext block, it chains into the next one
            let current_block = block;
            self.cipher.decrypt_block(&mut block);
            xor_block(&mut block, &prev_block);

            chunk.copy_from_slice(&block);
            prev_block = current_block;

            monitor.after_block(index);
        }
        Ok(())
    }

    /// Encrypts a block-aligned message into a new buffer
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut out = plaintext.to_vec();
        self.encrypt_in_place(&mut out, &())?;
        Ok(out)
    }

    /// Decrypts a block-aligned message into a new buffer
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut out = ciphertext.to_vec();
        self.decrypt_in_place(&mut out, &())?;
        Ok(out)
    }
}

impl<B: BlockCipher> Drop for Cbc<'_, B> {
    fn drop(&mut self) {
        self.iv.zeroize();
    }
}
