//! From-scratch AES-128 block cipher.
//!
//! This crate follows FIPS-197 and provides:
//! - GF(2^8) multiplication and fixed-multiplier tables ([`gf`]).
//! - Forward and inverse S-boxes generated from field inverses ([`sbox`]).
//! - Key schedule for AES-128 ([`expand_key`]).
//! - The four round transformations, each direction-aware ([`round`]).
//! - Single-block encryption and decryption ([`encrypt_block`], [`decrypt_block`]).
//!
//! All tables are built by `const` evaluation. Lookups are indexed by secret
//! data, so the implementation is not constant-time and should not be treated
//! as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
pub mod round;
pub mod sbox;
mod schedule;

pub use crate::block::{block_from_slice, xor_in_place, Block, BLOCK_LEN};
pub use crate::cipher::{decrypt_block, encrypt_block, Aes128, Stage, ROUNDS};
pub use crate::error::Error;
pub use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
pub use crate::round::Direction;
pub use crate::schedule::{expand_key, RCON};
