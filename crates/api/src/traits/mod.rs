//! Capability traits implemented by concrete cipher engines

pub mod symmetric;

pub use symmetric::SymmetricCipher;
