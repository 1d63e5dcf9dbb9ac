//! Forward and inverse AES S-boxes derived from GF(2^8) inverses.

use crate::gf::gmul;

/// A 256-entry byte substitution table.
pub type SBox = [u8; 256];

/// Builds the forward and inverse S-boxes.
///
/// Walks the multiplicative group with `p` (times 3) and `q` (times 3⁻¹ = `0xf6`)
/// so that `p * q == 1` holds at every step, then applies the affine map to
/// `q`. The walk visits all 255 non-zero bytes before `p` returns to 1.
pub const fn generate_sboxes() -> (SBox, SBox) {
    let mut forward = [0u8; 256];
    let mut inverse = [0u8; 256];
    let mut p = 1u8;
    let mut q = 1u8;
    loop {
        p = gmul(p, 3);
        q = gmul(q, 0xf6);
        let affine = q
            ^ q.rotate_left(1)
            ^ q.rotate_left(2)
            ^ q.rotate_left(3)
            ^ q.rotate_left(4)
            ^ 0x63;
        forward[p as usize] = affine;
        inverse[affine as usize] = p;
        if p == 1 {
            break;
        }
    }
    // zero has no inverse
    forward[0] = 0x63;
    inverse[0x63] = 0;
    (forward, inverse)
}

const SBOXES: (SBox, SBox) = generate_sboxes();

/// Forward S-box.
pub static SBOX: SBox = SBOXES.0;
/// Inverse S-box.
pub static INV_SBOX: SBox = SBOXES.1;

/// Substitutes `byte` through the forward S-box.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// Substitutes `byte` through the inverse S-box.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_entries() {
        assert_eq!(sbox(0x00), 0x63);
        assert_eq!(sbox(0x01), 0x7c);
        assert_eq!(sbox(0x53), 0xed);
        assert_eq!(sbox(0xff), 0x16);
        assert_eq!(inv_sbox(0x63), 0x00);
        assert_eq!(inv_sbox(0x00), 0x52);
        assert_eq!(inv_sbox(0xed), 0x53);
    }

    #[test]
    fn sbox_is_bijection() {
        let mut seen = [false; 256];
        for x in 0..=255u8 {
            assert_eq!(inv_sbox(sbox(x)), x);
            assert_eq!(sbox(inv_sbox(x)), x);
            let s = sbox(x) as usize;
            assert!(!seen[s], "duplicate output {s:#04x}");
            seen[s] = true;
        }
    }

    #[test]
    fn no_fixed_points() {
        for x in 0..=255u8 {
            assert_ne!(sbox(x), x);
            assert_ne!(sbox(x), !x);
        }
    }

    #[test]
    fn runtime_generation_matches_statics() {
        let (forward, inverse) = generate_sboxes();
        assert_eq!(forward, SBOX);
        assert_eq!(inverse, INV_SBOX);
    }
}
