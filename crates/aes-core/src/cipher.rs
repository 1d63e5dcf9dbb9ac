//! AES-128 block encryption and decryption.
//!
//! The cipher is a fixed sequence of eleven [`Stage`]s, each consuming the
//! round key with the same index. Decryption undoes the stages in reverse.

use crate::block::Block;
use crate::error::Error;
use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes, Direction};
use crate::schedule::expand_key;

/// Number of full rounds in AES-128.
pub const ROUNDS: usize = ROUND_KEY_COUNT - 1;

/// One step of the cipher pipeline.
///
/// Stage 0 is key whitening only, stages 1..=9 run SubBytes, ShiftRows,
/// MixColumns and AddRoundKey, and stage 10 is a round without MixColumns.
/// Stages can only be obtained for indices 0..=10.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stage {
    index: usize,
}

impl Stage {
    /// Stage 0.
    pub const INITIAL: Stage = Stage { index: 0 };
    /// Stage 10.
    pub const FINAL: Stage = Stage { index: ROUNDS };

    /// Returns the stage at position `index`, or `None` past the final stage.
    pub const fn at(index: usize) -> Option<Self> {
        if index <= ROUNDS {
            Some(Stage { index })
        } else {
            None
        }
    }

    /// All stages in encryption order.
    pub fn all() -> impl DoubleEndedIterator<Item = Stage> + ExactSizeIterator {
        (0..ROUND_KEY_COUNT).map(|index| Stage { index })
    }

    /// Index of the round key this stage consumes.
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Whether this stage runs SubBytes and ShiftRows.
    #[inline]
    pub const fn substitutes(self) -> bool {
        self.index != 0
    }

    /// Whether this stage runs MixColumns.
    #[inline]
    pub const fn mixes_columns(self) -> bool {
        self.index != 0 && self.index != ROUNDS
    }

    /// Applies this stage in the encryption direction.
    pub fn apply(self, state: &mut Block, round_key: &Block) {
        if self.substitutes() {
            sub_bytes(state, Direction::Forward);
            shift_rows(state, Direction::Forward);
        }
        if self.mixes_columns() {
            mix_columns(state, Direction::Forward);
        }
        add_round_key(state, round_key);
    }

    /// Reverses [`Stage::apply`] with the same round key.
    pub fn undo(self, state: &mut Block, round_key: &Block) {
        add_round_key(state, round_key);
        if self.mixes_columns() {
            mix_columns(state, Direction::Inverse);
        }
        if self.substitutes() {
            shift_rows(state, Direction::Inverse);
            sub_bytes(state, Direction::Inverse);
        }
    }
}

impl TryFrom<usize> for Stage {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Stage::at(index).ok_or(Error::InvalidStage { index })
    }
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;
    for (stage, round_key) in Stage::all().zip(round_keys.iter()) {
        stage.apply(&mut state, round_key);
    }
    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;
    for (stage, round_key) in Stage::all().zip(round_keys.iter()).rev() {
        stage.undo(&mut state, round_key);
    }
    state
}

/// AES-128 cipher bound to one expanded key.
#[derive(Clone, Copy, Debug)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Expands `key` once for repeated use.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Wraps an already expanded schedule.
    pub fn from_round_keys(round_keys: RoundKeys) -> Self {
        Self { round_keys }
    }

    /// The expanded key schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block.
    #[inline]
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block.
    #[inline]
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Aes128Key;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn hex16(s: &str) -> Block {
        let bytes = hex::decode(s).expect("valid hex");
        bytes.try_into().expect("16 bytes")
    }

    fn random_block(rng: &mut ChaCha20Rng) -> Block {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        block
    }

    fn assert_shareable<T: Send + Sync + Copy>() {}

    #[test]
    fn fips_appendix_c1() {
        let key = Aes128Key::from(hex16("000102030405060708090a0b0c0d0e0f"));
        let plain = hex16("00112233445566778899aabbccddeeff");
        let cipher = hex16("69c4e0d86a7b0430d8cdb78070b4c55a");
        let round_keys = expand_key(&key);
        assert_eq!(encrypt_block(&plain, &round_keys), cipher);
        assert_eq!(decrypt_block(&cipher, &round_keys), plain);
    }

    #[test]
    fn fips_appendix_b() {
        let key = Aes128Key::from(hex16("2b7e151628aed2a6abf7158809cf4f3c"));
        let plain = hex16("3243f6a8885a308d313198a2e0370734");
        let cipher = hex16("3925841d02dc09fbdc118597196a0b32");
        let aes = Aes128::new(&key);
        assert_eq!(aes.encrypt_block(&plain), cipher);
        assert_eq!(aes.decrypt_block(&cipher), plain);
    }

    #[test]
    fn stages_cover_schedule() {
        assert_eq!(Stage::at(0), Some(Stage::INITIAL));
        assert_eq!(Stage::at(ROUNDS), Some(Stage::FINAL));
        let indices: Vec<usize> = Stage::all().map(Stage::index).collect();
        assert_eq!(indices, (0..ROUND_KEY_COUNT).collect::<Vec<_>>());

        let mixing: Vec<usize> = Stage::all()
            .filter(|stage| stage.mixes_columns())
            .map(Stage::index)
            .collect();
        assert_eq!(mixing, (1..ROUNDS).collect::<Vec<_>>());
        assert!(!Stage::INITIAL.substitutes());
        assert!(Stage::FINAL.substitutes());
    }

    #[test]
    fn stage_past_final_is_rejected() {
        assert_eq!(Stage::at(ROUND_KEY_COUNT), None);
        assert_eq!(Stage::at(usize::MAX), None);
        assert_eq!(
            Stage::try_from(11usize),
            Err(Error::InvalidStage { index: 11 })
        );
        assert_eq!(Stage::try_from(10usize), Ok(Stage::FINAL));
        assert_eq!(
            Error::InvalidStage { index: 42 }.to_string(),
            "AES-128 has no stage 42"
        );
    }

    #[test]
    fn final_stage_skips_mix_columns() {
        let state: Block = core::array::from_fn(|i| i as u8);
        let round_key = [0x5a; 16];

        let mut expected = state;
        sub_bytes(&mut expected, Direction::Forward);
        shift_rows(&mut expected, Direction::Forward);
        add_round_key(&mut expected, &round_key);

        let mut last = state;
        Stage::FINAL.apply(&mut last, &round_key);
        assert_eq!(last, expected);

        let mut middle = state;
        let stage = Stage::at(ROUNDS - 1).expect("stage 9");
        stage.apply(&mut middle, &round_key);
        assert_ne!(middle, last);
    }

    #[test]
    fn each_stage_undoes_itself() {
        let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
        for stage in Stage::all() {
            let state = random_block(&mut rng);
            let round_key = random_block(&mut rng);
            let mut s = state;
            stage.apply(&mut s, &round_key);
            assert_ne!(s, state);
            stage.undo(&mut s, &round_key);
            assert_eq!(s, state, "stage {}", stage.index());
        }
    }

    #[test]
    fn round_trip_seeded() {
        let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
        for _ in 0..100 {
            let key = Aes128Key::from(random_block(&mut rng));
            let block = random_block(&mut rng);
            let round_keys = expand_key(&key);
            let ct = encrypt_block(&block, &round_keys);
            assert_ne!(ct, block);
            assert_eq!(decrypt_block(&ct, &round_keys), block);
        }
    }

    #[test]
    fn cipher_struct_matches_free_functions() {
        let key = Aes128Key::from(hex16("000102030405060708090a0b0c0d0e0f"));
        let aes = Aes128::new(&key);
        assert_eq!(aes.round_keys(), &expand_key(&key));
        let copy = Aes128::from_round_keys(*aes.round_keys());
        assert_eq!(
            copy.encrypt_block(&hex16("00112233445566778899aabbccddeeff")),
            hex16("69c4e0d86a7b0430d8cdb78070b4c55a")
        );
    }

    #[test]
    fn key_material_is_shareable() {
        assert_shareable::<RoundKeys>();
        assert_shareable::<Aes128Key>();
        assert_shareable::<Aes128>();
        assert_shareable::<Stage>();
    }

    #[test]
    fn round_keys_shared_across_threads() {
        let mut rng = ChaCha20Rng::from_seed([6u8; 32]);
        let round_keys = expand_key(&Aes128Key::from(random_block(&mut rng)));
        let blocks: Vec<Block> = (0..64).map(|_| random_block(&mut rng)).collect();
        let expected: Vec<Block> = blocks
            .iter()
            .map(|block| encrypt_block(block, &round_keys))
            .collect();

        let shared = &round_keys;
        let actual: Vec<Block> = std::thread::scope(|scope| {
            let handles: Vec<_> = blocks
                .chunks(16)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|block| encrypt_block(block, shared))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().expect("worker thread"))
                .collect()
        });
        assert_eq!(actual, expected);

        std::thread::scope(|scope| {
            for (block, ct) in blocks.iter().zip(&expected) {
                scope.spawn(move || assert_eq!(decrypt_block(ct, shared), *block));
            }
        });
    }
}
