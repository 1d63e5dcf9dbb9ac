//! Key types for AES-128.

use crate::block::{Block, BLOCK_LEN};
use crate::error::Error;

/// Number of round keys produced for AES-128 (initial key plus ten rounds).
pub const ROUND_KEY_COUNT: usize = 11;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 16] = value.try_into().map_err(|_| Error::InvalidLength {
            expected: 16,
            actual: value.len(),
        })?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Aes128Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Iterates over the round keys in schedule order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Block> + ExactSizeIterator {
        self.0.iter()
    }

    /// Number of round keys, always [`ROUND_KEY_COUNT`].
    #[inline]
    pub const fn len(&self) -> usize {
        ROUND_KEY_COUNT
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Flattens the schedule into its 176-byte form.
    pub fn to_bytes(&self) -> [u8; ROUND_KEY_COUNT * BLOCK_LEN] {
        let mut out = [0u8; ROUND_KEY_COUNT * BLOCK_LEN];
        for (chunk, round_key) in out.chunks_exact_mut(BLOCK_LEN).zip(self.0.iter()) {
            chunk.copy_from_slice(round_key);
        }
        out
    }
}
