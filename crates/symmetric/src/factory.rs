//! Engine selection by algorithm and mode
//!
//! Every `(Algorithm, CipherMode)` pair can be requested. Pairs without an
//! implementation fail with `UnsupportedAlgorithm` or `UnsupportedMode`
//! instead of silently falling back to another engine.

use api::error::{Error, Result};
use api::types::{Algorithm, CipherMode, KeySize, RunOptions};
use api::SymmetricCipher;
use log::debug;

use crate::aes::{AesCbc, AesEcb};
use crate::config::CipherConfig;

/// Names of every engine the factory can build
pub const AVAILABLE_ALGORITHMS: &[&str] = &["AES-ECB", "AES-CBC"];

/// Any engine the factory can build
#[derive(Debug, Clone)]
pub enum Cipher {
    /// AES in Electronic Codebook mode
    AesEcb(AesEcb),
    /// AES in Cipher Block Chaining mode
    AesCbc(AesCbc),
}

impl Cipher {
    /// Algorithm family of the engine
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::AesEcb(_) | Self::AesCbc(_) => Algorithm::Aes,
        }
    }

    /// Chaining mode of the engine
    pub fn mode(&self) -> CipherMode {
        match self {
            Self::AesEcb(_) => CipherMode::Ecb,
            Self::AesCbc(_) => CipherMode::Cbc,
        }
    }

    fn engine(&self) -> &dyn SymmetricCipher {
        match self {
            Self::AesEcb(engine) => engine,
            Self::AesCbc(engine) => engine,
        }
    }
}

impl SymmetricCipher for Cipher {
    fn name(&self) -> &'static str {
        self.engine().name()
    }

    fn block_size(&self) -> usize {
        self.engine().block_size()
    }

    fn supported_key_sizes(&self) -> &'static [KeySize] {
        self.engine().supported_key_sizes()
    }

    fn supported_modes(&self) -> &'static [CipherMode] {
        self.engine().supported_modes()
    }

    fn supports_concurrent_dispatch(&self) -> bool {
        self.engine().supports_concurrent_dispatch()
    }

    fn encrypt_with(
        &self,
        plaintext: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        options: &RunOptions<'_>,
    ) -> Result<Vec<u8>> {
        self.engine().encrypt_with(plaintext, key, iv, options)
    }

    fn decrypt_with(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        options: &RunOptions<'_>,
    ) -> Result<Vec<u8>> {
        self.engine().decrypt_with(ciphertext, key, iv, options)
    }
}

/// Builds engines from an algorithm and a mode
pub struct CipherFactory;

impl CipherFactory {
    /// Engine for `algorithm` in `mode` with the default configuration
    pub fn create(algorithm: Algorithm, mode: CipherMode) -> Result<Cipher> {
        Self::create_with(algorithm, mode, CipherConfig::default())
    }

    /// Engine for `algorithm` in `mode` with an explicit configuration
    pub fn create_with(algorithm: Algorithm, mode: CipherMode, config: CipherConfig) -> Result<Cipher> {
        config.validate()?;
        if algorithm != Algorithm::Aes {
            return Err(Error::UnsupportedAlgorithm { algorithm });
        }

        let cipher = match mode {
            CipherMode::Ecb => Cipher::AesEcb(AesEcb::with_config(config)),
            CipherMode::Cbc => Cipher::AesCbc(AesCbc::with_config(config)),
            other => return Err(Error::UnsupportedMode { mode: other }),
        };
        debug!("created {} engine", cipher.name());
        Ok(cipher)
    }

    /// AES engine in `mode`
    pub fn create_aes(mode: CipherMode) -> Result<Cipher> {
        Self::create(Algorithm::Aes, mode)
    }

    /// Engine from a name such as `AES-CBC` or `aes-ecb`
    ///
    /// A bare algorithm name selects CBC.
    pub fn from_name(name: &str) -> Result<Cipher> {
        let (algorithm, mode) = match name.trim().split_once('-') {
            Some((algorithm, mode)) => (algorithm, Some(mode)),
            None => (name.trim(), None),
        };

        let algorithm: Algorithm = algorithm.parse()?;
        if algorithm != Algorithm::Aes {
            return Err(Error::UnsupportedAlgorithm { algorithm });
        }
        let mode = match mode {
            Some(mode) => mode.parse()?,
            None => CipherMode::Cbc,
        };
        Self::create(algorithm, mode)
    }

    /// Names of every engine this factory can build
    pub fn available_algorithms() -> &'static [&'static str] {
        AVAILABLE_ALGORITHMS
    }
}
