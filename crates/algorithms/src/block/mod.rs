//! Block cipher implementations
//!
//! This module contains the AES block engine and the ECB/CBC block iteration
//! built on top of it.
//!
//! ## Example usage
//!
//! ```
//! use ucrypt_algorithms::block::{Aes, BlockCipher};
//! use ucrypt_algorithms::block::modes::Cbc;
//!
//! let cipher = Aes::new(&[0x2b; 16]).unwrap();
//! let mode = Cbc::new(&cipher, &[0u8; 16]).unwrap();
//!
//! let plaintext = b"secret message with padding...!!"; // Exactly 32 bytes (multiple of 16)
//! let ciphertext = mode.encrypt(plaintext).unwrap();
//! let decrypted = mode.decrypt(&ciphertext).unwrap();
//!
//! assert_eq!(plaintext, &decrypted[..]);
//! ```

use params::utils::symmetric::AES_BLOCK_SIZE;

pub mod aes;
pub mod modes;

// Re-exports
pub use aes::Aes;
pub use modes::{BlockMonitor, Cbc, Ecb};

/// One cipher block
pub type Block = [u8; AES_BLOCK_SIZE];

/// Trait for keyed block ciphers
pub trait BlockCipher {
    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Returns the name of the block cipher
    fn name(&self) -> &'static str;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut Block);

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut Block);
}
