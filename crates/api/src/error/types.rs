//! Error type definitions for cipher operations

use crate::types::{Algorithm, CipherMode};

/// Primary error type for cipher operations
///
/// Every failure aborts the whole call. No variant is ever returned together
/// with partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Key length is not one of 16, 24 or 32 bytes
    #[error("invalid key size: expected 16, 24 or 32 bytes, got {actual}")]
    InvalidKeySize {
        /// Length of the rejected key in bytes
        actual: usize,
    },

    /// Initialization vector has the wrong length for the mode
    #[error("invalid IV size: expected {expected} bytes, got {actual}")]
    InvalidIvSize {
        /// Required IV length in bytes
        expected: usize,
        /// Length of the rejected IV in bytes
        actual: usize,
    },

    /// Ciphertext is not a whole number of blocks
    #[error("invalid ciphertext length: {actual} bytes is not a multiple of the {block_size}-byte block size")]
    InvalidCiphertextLength {
        /// Block size the input must align to
        block_size: usize,
        /// Length of the rejected input in bytes
        actual: usize,
    },

    /// Trailing PKCS7 bytes of a decrypted buffer are malformed
    #[error("invalid PKCS7 padding")]
    InvalidPadding,

    /// The requested algorithm has no implementation
    #[error("{algorithm} is not implemented")]
    UnsupportedAlgorithm {
        /// The algorithm that was requested
        algorithm: Algorithm,
    },

    /// The requested chaining mode has no implementation
    #[error("{mode} mode is not implemented")]
    UnsupportedMode {
        /// The mode that was requested
        mode: CipherMode,
    },

    /// The caller raised the cancellation flag between two blocks
    #[error("operation cancelled")]
    Cancelled,

    /// Invalid configuration or call parameter
    #[error("{context}: {message}")]
    InvalidParameter {
        /// Parameter or operation the error refers to
        context: &'static str,
        /// Why the value was rejected
        message: String,
    },
}

/// Fieldless category of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidKeySize,
    InvalidIvSize,
    InvalidCiphertextLength,
    InvalidPadding,
    UnsupportedAlgorithm,
    UnsupportedMode,
    Cancelled,
    InvalidParameter,
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Category of this error, without its context fields
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidKeySize { .. } => ErrorKind::InvalidKeySize,
            Self::InvalidIvSize { .. } => ErrorKind::InvalidIvSize,
            Self::InvalidCiphertextLength { .. } => ErrorKind::InvalidCiphertextLength,
            Self::InvalidPadding => ErrorKind::InvalidPadding,
            Self::UnsupportedAlgorithm { .. } => ErrorKind::UnsupportedAlgorithm,
            Self::UnsupportedMode { .. } => ErrorKind::UnsupportedMode,
            Self::Cancelled => ErrorKind::Cancelled,
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
        }
    }
}
