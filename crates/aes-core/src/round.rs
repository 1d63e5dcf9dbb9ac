//! AES round transformations.
//!
//! All transforms work in place on a column-major [`Block`]. The ones that
//! have an inverse take a [`Direction`] instead of a separate `inv_*` function.

use crate::block::{xor_in_place, Block};
use crate::gf::{MUL11, MUL13, MUL14, MUL2, MUL3, MUL9};
use crate::sbox::{INV_SBOX, SBOX};

/// Selects the forward transform or its inverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Encryption direction.
    Forward,
    /// Decryption direction.
    Inverse,
}

impl Direction {
    /// Returns the opposite direction.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Inverse,
            Direction::Inverse => Direction::Forward,
        }
    }
}

/// Substitutes every byte of the state through the S-box or its inverse.
#[inline]
pub fn sub_bytes(state: &mut Block, direction: Direction) {
    let table = match direction {
        Direction::Forward => &SBOX,
        Direction::Inverse => &INV_SBOX,
    };
    for byte in state.iter_mut() {
        *byte = table[*byte as usize];
    }
}

/// Rotates row `r` left (forward) or right (inverse) by `r` positions.
pub fn shift_rows(state: &mut Block, direction: Direction) {
    for row in 1..4 {
        let mut bytes = [state[row], state[row + 4], state[row + 8], state[row + 12]];
        match direction {
            Direction::Forward => bytes.rotate_left(row),
            Direction::Inverse => bytes.rotate_right(row),
        }
        for (col, byte) in bytes.into_iter().enumerate() {
            state[row + 4 * col] = byte;
        }
    }
}

// Rows are circular shifts of (2, 3, 1, 1).
fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = col.map(usize::from);
    let [b0, b1, b2, b3] = *col;
    col[0] = MUL2[a0] ^ MUL3[a1] ^ b2 ^ b3;
    col[1] = b0 ^ MUL2[a1] ^ MUL3[a2] ^ b3;
    col[2] = b0 ^ b1 ^ MUL2[a2] ^ MUL3[a3];
    col[3] = MUL3[a0] ^ b1 ^ b2 ^ MUL2[a3];
}

// Rows are circular shifts of (14, 11, 13, 9).
fn inv_mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = col.map(usize::from);
    col[0] = MUL14[a0] ^ MUL11[a1] ^ MUL13[a2] ^ MUL9[a3];
    col[1] = MUL9[a0] ^ MUL14[a1] ^ MUL11[a2] ^ MUL13[a3];
    col[2] = MUL13[a0] ^ MUL9[a1] ^ MUL14[a2] ^ MUL11[a3];
    col[3] = MUL11[a0] ^ MUL13[a1] ^ MUL9[a2] ^ MUL14[a3];
}

/// MixColumns (or its inverse) over all four columns.
pub fn mix_columns(state: &mut Block, direction: Direction) {
    for chunk in state.chunks_exact_mut(4) {
        let mut column = [chunk[0], chunk[1], chunk[2], chunk[3]];
        match direction {
            Direction::Forward => mix_single_column(&mut column),
            Direction::Inverse => inv_mix_single_column(&mut column),
        }
        chunk.copy_from_slice(&column);
    }
}

/// Adds (XORs) a round key into the state. Its own inverse.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
