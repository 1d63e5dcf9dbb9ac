//! AES-128 key expansion.

use crate::gf::xtime;
use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
use crate::sbox::sbox;

type Word = [u8; 4];

const WORDS: usize = 4 * ROUND_KEY_COUNT;

const fn rcon_table() -> [u8; 10] {
    let mut rcon = [0u8; 10];
    let mut value = 1u8;
    let mut i = 0;
    while i < 10 {
        rcon[i] = value;
        value = xtime(value);
        i += 1;
    }
    rcon
}

/// Round constants; `RCON[i - 1]` is used for key word `4 * i`.
pub const RCON: [u8; 10] = rcon_table();

fn rot_word(word: Word) -> Word {
    let [a, b, c, d] = word;
    [b, c, d, a]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

fn xor_word(lhs: Word, rhs: Word) -> Word {
    [lhs[0] ^ rhs[0], lhs[1] ^ rhs[1], lhs[2] ^ rhs[2], lhs[3] ^ rhs[3]]
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [[0u8; 4]; WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in 4..WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / 4 - 1];
        }
        w[i] = xor_word(w[i - 4], temp);
    }

    let mut round_keys = [[0u8; 16]; ROUND_KEY_COUNT];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(word);
        }
    }

    RoundKeys(round_keys)
}
