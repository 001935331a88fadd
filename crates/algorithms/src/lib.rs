//! AES block engine and chaining primitives
//!
//! This crate provides the Rijndael/AES block cipher (key expansion, the
//! forward and inverse round network) and the block iteration of the ECB
//! and CBC modes, together with PKCS#7 padding.
//!
//! Everything here is synchronous and allocation-light: the only state is the
//! expanded key schedule, owned by an [`Aes`] value and wiped when it drops.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{Aes, BlockCipher, BlockMonitor, Cbc, Ecb};

// Padding schemes
pub mod padding;
