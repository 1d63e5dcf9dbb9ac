//! Arithmetic in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.
//!
//! Every table here is produced by `const` evaluation, so the lookups used by
//! MixColumns cost nothing at startup and are shared by all callers.

/// Low byte of the reduction polynomial `0x11b`.
const REDUCTION: u8 = 0x1b;

/// Lookup table mapping `i` to `i * n` for a fixed multiplier `n`.
pub type MulTable = [u8; 256];

/// Multiplies `a` by `x` (i.e. by 2).
#[inline]
pub const fn xtime(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Peasant multiplication of `a` and `b` over GF(2^8).
pub const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        b >>= 1;
        let hi_bit_set = a & 0x80 != 0;
        a <<= 1;
        if hi_bit_set {
            a ^= REDUCTION;
        }
        i += 1;
    }
    product
}

/// Builds the table `i -> gmul(i, n)`.
pub const fn mul_table(n: u8) -> MulTable {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = gmul(i as u8, n);
        i += 1;
    }
    table
}

/// `i * 2`
pub static MUL2: MulTable = mul_table(2);
/// `i * 3`
pub static MUL3: MulTable = mul_table(3);
/// `i * 9`
pub static MUL9: MulTable = mul_table(9);
/// `i * 11`
pub static MUL11: MulTable = mul_table(11);
/// `i * 13`
pub static MUL13: MulTable = mul_table(13);
/// `i * 14`
pub static MUL14: MulTable = mul_table(14);
