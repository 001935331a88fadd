//! Electronic Codebook (ECB) mode
//!
//! Every block is run through the cipher independently, so any block range
//! can be processed on its own. This type iterates block-aligned buffers only;
//! PKCS7 padding is the caller's job.

use api::error::{validate, Result};
use params::utils::symmetric::AES_BLOCK_SIZE;

use super::BlockMonitor;
use crate::block::{Block, BlockCipher};

/// ECB mode over a borrowed block cipher
pub struct Ecb<'a, B: BlockCipher> {
    cipher: &'a B,
}

impl<'a, B: BlockCipher> Ecb<'a, B> {
    /// Creates a new ECB mode instance over `cipher`
    pub fn new(cipher: &'a B) -> Self {
        Self { cipher }
    }

    /// Encrypts a block-aligned buffer in place
    pub fn encrypt_in_place<M: BlockMonitor>(&self, data: &mut [u8], monitor: &M) -> Result<()> {
        self.apply(data, monitor, |cipher, block| cipher.encrypt_block(block))
    }

    /// Decrypts a block-aligned buffer in place
    pub fn decrypt_in_place<M: BlockMonitor>(&self, data: &mut [u8], monitor: &M) -> Result<()> {
        self.apply(data, monitor, |cipher, block| cipher.decrypt_block(block))
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

    fn apply<M, F>(&self, data: &mut [u8], monitor: &M, op: F) -> Result<()>
    where
        M: BlockMonitor,
        F: Fn(&B, &mut Block),
    {
        validate::block_aligned(data.len(), AES_BLOCK_SIZE)?;

        for (index, chunk) in data.chunks_exact_mut(AES_BLOCK_SIZE).enumerate() {
            monitor.before_block(index)?;

            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);
            op(self.cipher, &mut block);
            chunk.copy_from_slice(&block);

            monitor.after_block(index);
        }
        Ok(())
    }
}
