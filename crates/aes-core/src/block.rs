//! Block representation helpers.

use crate::error::Error;

/// AES block of 16 bytes, laid out column-major (`index = row + 4 * column`).
pub type Block = [u8; 16];

/// Size of a block in bytes.
pub const BLOCK_LEN: usize = 16;

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies a 16-byte slice into a [`Block`].
pub fn block_from_slice(bytes: &[u8]) -> Result<Block, Error> {
    bytes.try_into().map_err(|_| Error::InvalidLength {
        expected: BLOCK_LEN,
        actual: bytes.len(),
    })
}
