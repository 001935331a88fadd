//! # ucrypt
//!
//! A software implementation of the Rijndael/AES block cipher (FIPS-197) with
//! ECB and CBC chaining, PKCS#7 padding, progress reporting, cooperative
//! cancellation and concurrent dispatch of independent blocks.
//!
//! ## Usage
//!
//! ```
//! use ucrypt::prelude::*;
//!
//! let cipher = CipherFactory::create(Algorithm::Aes, CipherMode::Cbc)?;
//! let key = [0x2b; 32];
//! let iv = [0x01; 16];
//!
//! let ciphertext = cipher.encrypt(b"hello, rijndael", &key, Some(&iv), None)?;
//! let plaintext = cipher.decrypt(&ciphertext, &key, Some(&iv), None)?;
//! assert_eq!(plaintext, b"hello, rijndael");
//! # Ok::<(), ucrypt::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `symmetric` (default): padded ECB/CBC engines and the cipher factory
//! - `algorithms`: the bare block primitive, round steps and chaining loops
//! - `std` (default): operating-system randomness for keys and IVs
//! - `serde`: serialization of selectors and engine configuration
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ucrypt-api`]: Error taxonomy, selector enums and the cipher trait
//! - [`ucrypt-params`]: AES constants
//! - [`ucrypt-algorithms`]: Block primitive, ECB/CBC loops and PKCS#7
//! - [`ucrypt-symmetric`]: Engines, configuration and factory

// Core re-exports (always available)
pub use ucrypt_api as api;
pub use ucrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use ucrypt_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use ucrypt_symmetric as symmetric;

/// Encrypts `plaintext` with AES in `mode`
///
/// Shorthand for building an engine through the factory and calling it once
/// without progress reporting.
#[cfg(feature = "symmetric")]
pub fn encrypt(
    mode: api::CipherMode,
    plaintext: &[u8],
    key: &[u8],
    iv: Option<&[u8]>,
) -> api::Result<Vec<u8>> {
    use api::SymmetricCipher;
    symmetric::CipherFactory::create_aes(mode)?.encrypt(plaintext, key, iv, None)
}

/// Decrypts `ciphertext` with AES in `mode`
#[cfg(feature = "symmetric")]
pub fn decrypt(
    mode: api::CipherMode,
    ciphertext: &[u8],
    key: &[u8],
    iv: Option<&[u8]>,
) -> api::Result<Vec<u8>> {
    use api::SymmetricCipher;
    symmetric::CipherFactory::create_aes(mode)?.decrypt(ciphertext, key, iv, None)
}

/// Common imports for ucrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result};

    // Re-export core trait and selectors
    pub use crate::api::{
        Algorithm, CancelFlag, CipherMode, KeySize, ProgressCallback, RunOptions,
        SymmetricCipher,
    };

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::block::{Aes, BlockCipher};

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{AesCbc, AesEcb, Cipher, CipherConfig, CipherFactory};
}
