//! Error handling for the cipher ecosystem

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, ErrorKind, Result};
