//! Shared selector types and per-call options
//!
//! These types name what a caller asks for (an algorithm, a chaining mode, a
//! key size) and carry the optional hooks of a single call (progress callback,
//! cancellation flag).

use core::fmt;
use core::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use params::utils::symmetric::{
    AES128_KEY_SIZE, AES128_ROUNDS, AES192_KEY_SIZE, AES192_ROUNDS, AES256_KEY_SIZE, AES256_ROUNDS,
    AES_WORD_SIZE,
};

use crate::error::{Error, Result};

/// Block or stream cipher families a caller may request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    Aes,
    Des,
    TripleDes,
    ChaCha20,
    Blowfish,
    Twofish,
    Rc4,
}

impl Algorithm {
    /// Canonical short name, as used in cipher names like `AES-CBC`
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aes => "AES",
            Self::Des => "DES",
            Self::TripleDes => "3DES",
            Self::ChaCha20 => "ChaCha20",
            Self::Blowfish => "Blowfish",
            Self::Twofish => "Twofish",
            Self::Rc4 => "RC4",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "AES" => Ok(Self::Aes),
            "DES" => Ok(Self::Des),
            "3DES" | "TDES" | "TRIPLEDES" => Ok(Self::TripleDes),
            "CHACHA20" => Ok(Self::ChaCha20),
            "BLOWFISH" => Ok(Self::Blowfish),
            "TWOFISH" => Ok(Self::Twofish),
            "RC4" => Ok(Self::Rc4),
            _ => Err(Error::param("algorithm", format!("unknown algorithm name '{}'", s))),
        }
    }
}

/// Block cipher modes of operation a caller may request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CipherMode {
    /// Electronic Codebook
    Ecb,
    /// Cipher Block Chaining
    Cbc,
    /// Cipher Feedback
    Cfb,
    /// Output Feedback
    Ofb,
    /// Counter
    Ctr,
    /// Galois/Counter Mode
    Gcm,
}

impl CipherMode {
    /// Canonical upper-case mode name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ecb => "ECB",
            Self::Cbc => "CBC",
            Self::Cfb => "CFB",
            Self::Ofb => "OFB",
            Self::Ctr => "CTR",
            Self::Gcm => "GCM",
        }
    }

    /// Whether the mode consumes an initialization vector
    pub const fn requires_iv(&self) -> bool {
        !matches!(self, Self::Ecb)
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ECB" => Ok(Self::Ecb),
            "CBC" => Ok(Self::Cbc),
            "CFB" => Ok(Self::Cfb),
            "OFB" => Ok(Self::Ofb),
            "CTR" => Ok(Self::Ctr),
            "GCM" => Ok(Self::Gcm),
            _ => Err(Error::param("mode", format!("unknown mode name '{}'", s))),
        }
    }
}

/// AES key sizes; the discriminant is the key length in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(usize)]
pub enum KeySize {
    Aes128 = AES128_KEY_SIZE,
    Aes192 = AES192_KEY_SIZE,
    Aes256 = AES256_KEY_SIZE,
}

impl KeySize {
    /// All supported key sizes, smallest first
    pub const ALL: [KeySize; 3] = [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256];

    /// Map a key length in bytes to its key size
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            AES128_KEY_SIZE => Some(Self::Aes128),
            AES192_KEY_SIZE => Some(Self::Aes192),
            AES256_KEY_SIZE => Some(Self::Aes256),
            _ => None,
        }
    }

    /// Key length in bytes
    pub const fn len(&self) -> usize {
        *self as usize
    }

    /// Key length in bits
    pub const fn bits(&self) -> usize {
        self.len() * 8
    }

    /// Key length in 32-bit words (Nk)
    pub const fn words(&self) -> usize {
        self.len() / AES_WORD_SIZE
    }

    /// Number of transform rounds (Nr)
    pub const fn rounds(&self) -> usize {
        match self {
            Self::Aes128 => AES128_ROUNDS,
            Self::Aes192 => AES192_ROUNDS,
            Self::Aes256 => AES256_ROUNDS,
        }
    }
}

/// Progress notification hook: `(percentage in [0, 100], status message)`
///
/// Invoked synchronously, possibly from a worker thread. It is advisory only.
pub type ProgressCallback<'a> = &'a (dyn Fn(f64, &str) + Sync);

/// Cooperative cancellation handle shared between a caller and a running call
///
/// Cancellation is observed between blocks, never in the middle of one.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    flag: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Create a flag in the not-cancelled state
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of every call observing this flag
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// Optional hooks for a single encrypt/decrypt call
#[derive(Clone, Copy, Default)]
pub struct RunOptions<'a> {
    /// Progress callback, if any
    pub progress: Option<ProgressCallback<'a>>,
    /// Cancellation flag, if any
    pub cancel: Option<&'a CancelFlag>,
}

impl<'a> RunOptions<'a> {
    /// Options with no callback and no cancellation flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a progress callback
    pub fn with_progress(mut self, progress: ProgressCallback<'a>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Attach a cancellation flag
    pub fn with_cancel(mut self, cancel: &'a CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

impl fmt::Debug for RunOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunOptions")
            .field("progress", &self.progress.is_some())
            .field("cancel", &self.cancel)
            .finish()
    }
}
