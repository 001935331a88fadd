//! AES engines for the ucrypt library
//!
//! This crate turns the block primitives of `ucrypt-algorithms` into engines
//! that accept inputs of any length: PKCS#7 padding, ECB and CBC chaining,
//! progress reporting, cooperative cancellation and splitting of independent
//! blocks across worker threads. Engines are usually obtained from
//! [`CipherFactory`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod aes;
pub mod config;
mod dispatch;
pub mod factory;
mod progress;
pub mod random;
pub mod text;

// Re-export main types for convenience
pub use aes::{AesCbc, AesEcb};
pub use config::CipherConfig;
pub use factory::{Cipher, CipherFactory, AVAILABLE_ALGORITHMS};

pub use api::types::{Algorithm, CancelFlag, CipherMode, KeySize, ProgressCallback, RunOptions};
pub use api::SymmetricCipher;

// Re-export the API error system instead of custom error types
pub use api::error::{validate, Error, ErrorKind, Result};
