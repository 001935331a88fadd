//! Error handling for cryptographic primitives
//!
//! The primitives report failures with the shared API error type so no
//! conversion layer sits between the engine and its callers.

pub use api::error::{validate, Error, ErrorKind, Result};
