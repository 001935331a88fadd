//! Capability interface for symmetric block cipher engines
//!
//! A concrete engine fixes both the algorithm and the chaining mode. Callers
//! pick one through a factory and then only talk to this trait.

use crate::error::Result;
use crate::types::{CipherMode, KeySize, ProgressCallback, RunOptions};

/// Common trait for all symmetric cipher engines
pub trait SymmetricCipher {
    /// Engine name, e.g. `AES-CBC`
    fn name(&self) -> &'static str;

    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Key sizes accepted by [`encrypt`](Self::encrypt) and [`decrypt`](Self::decrypt)
    fn supported_key_sizes(&self) -> &'static [KeySize];

    /// Chaining modes the underlying algorithm is implemented for
    fn supported_modes(&self) -> &'static [CipherMode];

    /// Whether this engine may split a call across worker threads
    fn supports_concurrent_dispatch(&self) -> bool;

    /// Encrypts `plaintext`, honouring the hooks in `options`
    fn encrypt_with(
        &self,
        plaintext: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        options: &RunOptions<'_>,
    ) -> Result<Vec<u8>>;

    /// Decrypts `ciphertext`, honouring the hooks in `options`
    fn decrypt_with(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        options: &RunOptions<'_>,
    ) -> Result<Vec<u8>>;

    /// Encrypts `plaintext` with an optional progress callback
    fn encrypt(
        &self,
        plaintext: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<Vec<u8>> {
        let options = RunOptions {
            progress,
            cancel: None,
        };
        self.encrypt_with(plaintext, key, iv, &options)
    }

    /// Decrypts `ciphertext` with an optional progress callback
    fn decrypt(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        iv: Option<&[u8]>,
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<Vec<u8>> {
        let options = RunOptions {
            progress,
            cancel: None,
        };
        self.decrypt_with(ciphertext, key, iv, &options)
    }
}
