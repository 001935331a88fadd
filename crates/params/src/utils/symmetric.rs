//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// CBC initialization vector size in bytes (one block)
pub const AES_CBC_IV_SIZE: usize = AES_BLOCK_SIZE;

/// Size of one key schedule word in bytes
pub const AES_WORD_SIZE: usize = 4;

/// Columns in the AES state (Nb)
pub const AES_STATE_COLUMNS: usize = 4;

/// Round count (Nr) for a 128-bit key
pub const AES128_ROUNDS: usize = 10;

/// Round count (Nr) for a 192-bit key
pub const AES192_ROUNDS: usize = 12;

/// Round count (Nr) for a 256-bit key
pub const AES256_ROUNDS: usize = 14;

/// Default number of blocks between two progress notifications
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

/// Default minimum number of blocks handed to one worker thread
pub const DEFAULT_MIN_BLOCKS_PER_WORKER: usize = 64;
