//! AES block cipher implementation
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197, for 128, 192 and 256 bit keys. The S-box is a
//! table lookup; no constant-time guarantee is made.
//!
//! The engine is split into the constant [`tables`], the [`gf`] multiplier,
//! the [`round`] transform steps and the [`key_schedule`]. [`encrypt_block`]
//! and [`decrypt_block`] run the full Nr-round network over one block.

use api::error::Result;
use api::KeySize;
use params::utils::symmetric::AES_BLOCK_SIZE;

use super::{Block, BlockCipher};

pub mod gf;
pub mod key_schedule;
pub mod round;
pub mod tables;

pub use key_schedule::KeySchedule;
use round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

/// Encrypts one block in place with an expanded key
pub fn encrypt_block(block: &mut Block, schedule: &KeySchedule) {
    let rounds = schedule.rounds();

    // Initial round
    add_round_key(block, &schedule.round_key(0));

    // Main rounds
    for round in 1..rounds {
        sub_bytes(block);
        shift_rows(block);
        mix_columns(block);
        add_round_key(block, &schedule.round_key(round));
    }

    // Final round, no MixColumns
    sub_bytes(block);
    shift_rows(block);
    add_round_key(block, &schedule.round_key(rounds));
}

/// Decrypts one block in place with an expanded key
///
/// Straightforward inverse cipher: inside each inner round AddRoundKey runs
/// before InvMixColumns.
pub fn decrypt_block(block: &mut Block, schedule: &KeySchedule) {
    let rounds = schedule.rounds();

    // Initial round - AddRoundKey (final round key)
    add_round_key(block, &schedule.round_key(rounds));

    // Main rounds in reverse
    for round in (1..rounds).rev() {
        inv_shift_rows(block);
        inv_sub_bytes(block);
        add_round_key(block, &schedule.round_key(round));
        inv_mix_columns(block);
    }

    // Final round
    inv_shift_rows(block);
    inv_sub_bytes(block);
    add_round_key(block, &schedule.round_key(0));
}

/// AES block cipher with a key size chosen at runtime
#[derive(Clone, Debug)]
pub struct Aes {
    schedule: KeySchedule,
}

impl Aes {
    /// Expands `key` (16, 24 or 32 bytes) into a ready cipher
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            schedule: KeySchedule::expand(key)?,
        })
    }

    /// Key size this instance was created with
    pub fn key_size(&self) -> KeySize {
        self.schedule.key_size()
    }

    /// Number of rounds (Nr)
    pub fn rounds(&self) -> usize {
        self.schedule.rounds()
    }
}

impl BlockCipher for Aes {
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name(&self) -> &'static str {
        match self.key_size() {
            KeySize::Aes128 => "AES-128",
            KeySize::Aes192 => "AES-192",
            KeySize::Aes256 => "AES-256",
        }
    }

    fn encrypt_block(&self, block: &mut Block) {
        encrypt_block(block, &self.schedule);
    }

    fn decrypt_block(&self, block: &mut Block) {
        decrypt_block(block, &self.schedule);
    }
}
