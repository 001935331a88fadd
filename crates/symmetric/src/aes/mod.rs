//! AES engines for the ECB and CBC chaining modes
//!
//! Both engines pad the plaintext with PKCS#7 before encryption and strip it
//! after decryption, so inputs of any length are accepted. Keys are 16, 24 or
//! 32 bytes; CBC additionally needs a 16-byte IV.
//!
//! ```
//! use ucrypt_symmetric::{AesCbc, SymmetricCipher};
//!
//! let key = [0x2b; 16];
//! let iv = [0x00; 16];
//! let engine = AesCbc::new();
//!
//! let ciphertext = engine.encrypt(b"attack at dawn", &key, Some(&iv), None).unwrap();
//! assert_eq!(ciphertext.len(), 16);
//!
//! let plaintext = engine.decrypt(&ciphertext, &key, Some(&iv), None).unwrap();
//! assert_eq!(plaintext, b"attack at dawn");
//! ```

use algorithms::block::{Aes, BlockCipher, Cbc, Ecb};
use algorithms::padding;
use api::error::{validate, Error, Result};
use api::types::{CipherMode, KeySize, RunOptions};
use api::SymmetricCipher;
use log::debug;
use params::utils::symmetric::{AES_BLOCK_SIZE, AES_CBC_IV_SIZE};
use zeroize::Zeroize;

use crate::config::CipherConfig;
use crate::dispatch;
use crate::progress::{Direction, Offset, Reporter};

const AES_MODES: &[CipherMode] = &[CipherMode::Ecb, CipherMode::Cbc];

/// Runs `body` over `buffer`, wiping the buffer if it fails
fn wipe_on_error<F>(mut buffer: Vec<u8>, body: F) -> Result<Vec<u8>>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    match body(&mut buffer) {
        Ok(()) => Ok(buffer),
        Err(e) => {
            buffer.zeroize();
            Err(e)
        }
    }
}

/// Strips the padding in place, keeping only the plaintext
fn strip_padding(buffer: &mut Vec<u8>) -> Result<()> {
    let len = padding::unpadded_len(buffer, AES_BLOCK_SIZE)?;
    buffer[len..].zeroize();
    buffer.truncate(len);
    Ok(())
}

fn require_iv(iv: Option<&[u8]>) -> Result<&[u8]> {
    let iv = iv.ok_or(Error::InvalidIvSize {
        expected: AES_CBC_IV_SIZE,
        actual: 0,
    })?;
    validate::iv_size(iv.len(), AES_CBC_IV_SIZE)?;
    Ok(iv)
}

/// AES in Electronic Codebook mode
///
/// Identical plaintext blocks produce identical ciphertext blocks. Both
/// directions may be split across workers.
#[derive(Debug, Clone, Default)]
pub struct AesEcb {
    config: CipherConfig,
}

impl AesEcb {
    /// Engine with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an explicit configuration
    pub fn with_config(config: CipherConfig) -> Self {
        Self { config }
    }

    /// Configuration this engine dispatches with
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }
}

impl SymmetricCipher for AesEcb {
    fn name(&self) -> &'static str {
        "AES-ECB"
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn supported_key_sizes(&self) -> &'static [KeySize] {
        &KeySize::ALL
    }

    fn supported_modes(&self) -> &'static [CipherMode] {
        AES_MODES
    }

    fn supports_concurrent_dispatch(&self) -> bool {
        self.config.parallel
    }

    fn encrypt_with(
        &self,
        plaintext: &[u8],
        key: &[u8],
        _iv: Option<&[u8]>,
        options: &RunOptions<'_>,
    ) -> Result<Vec<u8>> {
        self.config.validate()?;
        let cipher = Aes::new(key)?;

        let buffer = padding::pad(plaintext, AES_BLOCK_SIZE);
        let total = buffer.len() / AES_BLOCK_SIZE;
        let workers = self.config.workers_for(total);
        let reporter = Reporter::new(
            options,
            Direction::Encrypt,
            total,
            self.config.progress_interval,
        );
        debug!(
            "{}: encrypting {} bytes as {} blocks on {} worker(s)",
            cipher.name(),
            plaintext.len(),
            total,
            workers
        );

        let ciphertext = wipe_on_error(buffer, |buffer| {
            dispatch::for_each_range(buffer, workers, |first, range| {
                Ecb::new(&cipher).encrypt_in_place(range, &Offset::new(first, &reporter))
            })
        })?;
        reporter.finish();
        debug!("{}: produced {} ciphertext bytes", cipher.name(), ciphertext.len());
        Ok(ciphertext)
    }

    fn decrypt_with(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        _iv: Option<&[u8]>,
        options: &RunOptions<'_>,
    ) -> Result<Vec<u8>> {
        self.config.validate()?;
        let cipher = Aes::new(key)?;
        validate::block_aligned(ciphertext.len(), AES_BLOCK_SIZE)?;

        let total = ciphertext.len() / AES_BLOCK_SIZE;
        let workers = self.config.workers_for(total);
        let reporter = Reporter::new(
            options,
            Direction::Decrypt,
            total,
            self.config.progress_interval,
        );
        debug!(
            "{}: decrypting {} blocks on {} worker(s)",
            cipher.name(),
            total,
            workers
        );

        let plaintext = wipe_on_error(ciphertext.to_vec(), |buffer| {
            dispatch::for_each_range(buffer, workers, |first, range| {
                Ecb::new(&cipher).decrypt_in_place(range, &Offset::new(first, &reporter))
            })?;
            strip_padding(buffer)
        })?;
        reporter.finish();
        debug!("{}: recovered {} plaintext bytes", cipher.name(), plaintext.len());
        Ok(plaintext)
    }
}

/// AES in Cipher Block Chaining mode
///
/// Encryption is inherently sequential and always runs on the calling thread.
/// Decryption of each block only depends on the ciphertext, so it may be split
/// across workers.
#[derive(Debug, Clone, Default)]
pub struct AesCbc {
    config: CipherConfig,
}

impl AesCbc {
    /// Engine with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an explicit configuration
    pub fn with_config(config: CipherConfig) -> Self {
        Self { config }
    }

    /// Configuration this engine dispatches with
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }
}

impl SymmetricCipher for AesCbc {
    fn name(&self) -> &'static str {
        "AES-CBC"
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn supported_key_sizes(&self) -> &'static [KeySize] {
        &KeySize::ALL
    }

    fn supported_modes(&self) -> &'static [CipherMode] {
        AES_MODES
    }

    fn supports_concurrent_dispatch(&self) -> bool {
        self.config.parallel
    }

    fn encrypt_with(
        &self,
        plaintext: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        options: &RunOptions<'_>,
    ) -> Result<Vec<u8>> {
        self.config.validate()?;
        let cipher = Aes::new(key)?;
        let iv = require_iv(iv)?;

        let buffer = padding::pad(plaintext, AES_BLOCK_SIZE);
        let total = buffer.len() / AES_BLOCK_SIZE;
        let reporter = Reporter::new(
            options,
            Direction::Encrypt,
            total,
            self.config.progress_interval,
        );
        debug!(
            "{}: encrypting {} bytes as {} blocks",
            cipher.name(),
            plaintext.len(),
            total
        );

        let ciphertext = wipe_on_error(buffer, |buffer| {
            Cbc::new(&cipher, iv)?.encrypt_in_place(buffer, &reporter)
        })?;
        reporter.finish();
        debug!("{}: produced {} ciphertext bytes", cipher.name(), ciphertext.len());
        Ok(ciphertext)
    }

    fn decrypt_with(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        options: &RunOptions<'_>,
    ) -> Result<Vec<u8>> {
        self.config.validate()?;
        let cipher = Aes::new(key)?;
        let iv = require_iv(iv)?;
        validate::block_aligned(ciphertext.len(), AES_BLOCK_SIZE)?;

        let total = ciphertext.len() / AES_BLOCK_SIZE;
        let workers = self.config.workers_for(total);
        let reporter = Reporter::new(
            options,
            Direction::Decrypt,
            total,
            self.config.progress_interval,
        );
        debug!(
            "{}: decrypting {} blocks on {} worker(s)",
            cipher.name(),
            total,
            workers
        );

        let plaintext = wipe_on_error(ciphertext.to_vec(), |buffer| {
            dispatch::for_each_range(buffer, workers, |first, range| {
                // A range chains on the ciphertext block just before it
                let chain = match first {
                    0 => iv,
                    _ => &ciphertext[(first - 1) * AES_BLOCK_SIZE..first * AES_BLOCK_SIZE],
                };
                Cbc::new(&cipher, chain)?.decrypt_in_place(range, &Offset::new(first, &reporter))
            })?;
            strip_padding(buffer)
        })?;
        reporter.finish();
        debug!("{}: recovered {} plaintext bytes", cipher.name(), plaintext.len());
        Ok(plaintext)
    }
}
