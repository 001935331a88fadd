//! AES key expansion (FIPS-197 section 5.2)

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use api::error::{validate, Result};
use api::KeySize;
use params::utils::symmetric::{AES_STATE_COLUMNS, AES_WORD_SIZE};

use super::tables::{rcon, sbox};

/// One 4-byte key schedule word
pub type Word = [u8; AES_WORD_SIZE];

/// Rotates a word left by one byte
#[inline(always)]
fn rot_word(word: Word) -> Word {
    [word[1], word[2], word[3], word[0]]
}

/// Substitutes each byte in a word using the AES S-box
#[inline(always)]
fn sub_word(word: Word) -> Word {
    [sbox(word[0]), sbox(word[1]), sbox(word[2]), sbox(word[3])]
}

/// Expanded round keys for one cipher key
///
/// Holds `4 * (Nr + 1)` words. The first `Nk` words are the cipher key itself.
/// Wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    words: Vec<Word>,
    #[zeroize(skip)]
    key_size: KeySize,
}

impl KeySchedule {
    /// Expands a 16, 24 or 32 byte key
    pub fn expand(key: &[u8]) -> Result<Self> {
        let key_size = validate::key_size(key.len())?;
        let nk = key_size.words();
        let total = AES_STATE_COLUMNS * (key_size.rounds() + 1);

        let mut words: Vec<Word> = Vec::with_capacity(total);
        for chunk in key.chunks_exact(AES_WORD_SIZE) {
            words.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for i in nk..total {
            let mut temp = words[i - 1];
            if i % nk == 0 {
                temp = sub_word(rot_word(temp));
                temp[0] ^= rcon(i / nk);
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }

            let back = words[i - nk];
            words.push([
                back[0] ^ temp[0],
                back[1] ^ temp[1],
                back[2] ^ temp[2],
                back[3] ^ temp[3],
            ]);
            temp.zeroize();
        }

        Ok(Self { words, key_size })
    }

    /// Key size the schedule was expanded from
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Number of rounds (Nr)
    pub fn rounds(&self) -> usize {
        self.key_size.rounds()
    }

    /// All schedule words in order
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The 16-byte round key for `round` in `0..=Nr`
    #[inline(always)]
    pub fn round_key(&self, round: usize) -> [u8; 16] {
        let mut out = [0u8; 16];
        let start = round * AES_STATE_COLUMNS;
        for (dst, word) in out
            .chunks_exact_mut(AES_WORD_SIZE)
            .zip(&self.words[start..start + AES_STATE_COLUMNS])
        {
            dst.copy_from_slice(word);
        }
        out
    }
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySchedule")
            .field("key_size", &self.key_size)
            .field("words", &self.words.len())
            .finish()
    }
}
