//! The AES round transform
//!
//! All steps work in place on a 16-byte state laid out column-major:
//! byte `column * 4 + row`.

use super::gf::gf_mul;
use super::tables::{inv_sbox, sbox};

/// A 4×4 byte state matrix in column-major order
pub type State = [u8; 16];

/// Forward MixColumns coefficients, first row of the circulant matrix
const MIX: [u8; 4] = [0x02, 0x03, 0x01, 0x01];

/// Inverse MixColumns coefficients, first row of the circulant matrix
const INV_MIX: [u8; 4] = [0x0e, 0x0b, 0x0d, 0x09];

/// SubBytes step
pub fn sub_bytes(state: &mut State) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Inverse SubBytes step
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// ShiftRows step: row `r` rotates left by `r` columns
pub fn shift_rows(state: &mut State) {
    let temp = *state;
    for column in 0..4 {
        for row in 1..4 {
            state[column * 4 + row] = temp[((column + row) % 4) * 4 + row];
        }
    }
}

/// Inverse ShiftRows: row `r` rotates right by `r` columns
pub fn inv_shift_rows(state: &mut State) {
    let temp = *state;
    for column in 0..4 {
        for row in 1..4 {
            state[((column + row) % 4) * 4 + row] = temp[column * 4 + row];
        }
    }
}

/// Replace every column with the circulant product `coeffs × column`
#[inline(always)]
fn mix_with(state: &mut State, coeffs: &[u8; 4]) {
    for column in state.chunks_exact_mut(4) {
        let s = [column[0], column[1], column[2], column[3]];
        for (row, out) in column.iter_mut().enumerate() {
            *out = (0..4).fold(0u8, |acc, k| acc ^ gf_mul(coeffs[(4 + k - row) % 4], s[k]));
        }
    }
}

/// MixColumns step
pub fn mix_columns(state: &mut State) {
    mix_with(state, &MIX);
}

/// Inverse MixColumns
pub fn inv_mix_columns(state: &mut State) {
    mix_with(state, &INV_MIX);
}

/// AddRoundKey step
#[inline(always)]
pub fn add_round_key(state: &mut State, round_key: &[u8; 16]) {
    for (byte, key) in state.iter_mut().zip(round_key.iter()) {
        *byte ^= key;
    }
}
