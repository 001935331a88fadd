//! Public API traits and types for the ucrypt library
//!
//! This crate provides the public API surface for the ucrypt ecosystem, including
//! the error taxonomy, the cipher capability trait and the enums used to select
//! an algorithm, a chaining mode and a key size.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result};
pub use types::*;

pub use traits::SymmetricCipher;

// Re-export trait modules for direct access
pub use traits::symmetric;
