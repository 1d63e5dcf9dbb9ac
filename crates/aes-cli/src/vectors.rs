//! Known-answer checks run by `aes128 self-test`.

use aes_core::round::{mix_columns, shift_rows, sub_bytes};
use aes_core::{
    decrypt_block, encrypt_block, expand_key, Aes128Key, Block, Direction, ROUND_KEY_COUNT,
};
use anyhow::{bail, Context, Result};
use tracing::{debug, info};

fn block(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str)
        .with_context(|| format!("decode vector {hex_str}"))?;
    aes_core::block_from_slice(&bytes)
        .with_context(|| format!("vector {hex_str}"))
}

fn check(name: &str, actual: &Block, expected: &Block) -> Result<()> {
    if actual != expected {
        bail!(
            "{name}: expected {}, got {}",
            hex::encode(expected),
            hex::encode(actual)
        );
    }
    debug!(check = name, value = %hex::encode(actual), "match");
    Ok(())
}

/// Checks a direction-aware transform against a vector in both directions.
fn check_transform(
    name: &str,
    transform: fn(&mut Block, Direction),
    input: &str,
    output: &str,
) -> Result<()> {
    let input = block(input)?;
    let output = block(output)?;

    let mut state = input;
    transform(&mut state, Direction::Forward);
    check(name, &state, &output)?;
    transform(&mut state, Direction::Inverse);
    check(&format!("inverse {name}"), &state, &input)?;

    info!("{name} passed");
    Ok(())
}

fn check_key_expansion() -> Result<()> {
    let key = Aes128Key::from(block("0f1571c947d9e8590cb7add6af7f6798")?);
    let round_keys = expand_key(&key);
    if round_keys.iter().count() != ROUND_KEY_COUNT {
        bail!("key_expansion: expected {ROUND_KEY_COUNT} round keys");
    }
    check(
        "key_expansion round 1",
        round_keys.get(1),
        &block("dc9037b09b49dfe997fe723f388115a7")?,
    )?;
    check(
        "key_expansion round 10",
        round_keys.get(10),
        &block("b48ef352ba98134e7f4d592086261876")?,
    )?;
    info!("key_expansion passed");
    Ok(())
}

fn check_cipher() -> Result<()> {
    let key = Aes128Key::from(block("000102030405060708090a0b0c0d0e0f")?);
    let plaintext = block("00112233445566778899aabbccddeeff")?;
    let ciphertext = block("69c4e0d86a7b0430d8cdb78070b4c55a")?;
    let round_keys = expand_key(&key);

    let encrypted = encrypt_block(&plaintext, &round_keys);
    check("encrypt", &encrypted, &ciphertext)?;
    let decrypted = decrypt_block(&ciphertext, &round_keys);
    check("decrypt", &decrypted, &plaintext)?;
    info!("cipher passed");
    Ok(())
}

/// Runs every known-answer check, stopping at the first mismatch.
pub fn run_all() -> Result<()> {
    check_transform(
        "sub_bytes",
        sub_bytes,
        "ea04658583455d965c3398b0f02dadc5",
        "87f24d97ec6e4c904ac346e78cd895a6",
    )?;
    check_transform(
        "shift_rows",
        shift_rows,
        "87ec4a8cf26ec3d84d4c46959790e7a6",
        "876e46a6f24ce78c4d904ad897ecc395",
    )?;
    check_transform(
        "mix_columns",
        mix_columns,
        "876e46a6f24ce78c4d904ad897ecc395",
        "473794ed40d4e4a5a3703aa64c9f42bc",
    )?;
    check_key_expansion()?;
    check_cipher()?;
    Ok(())
}
